use chrono::Local;

pub trait Clock {
    fn timestamp(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct SystemClock {
    format: String,
}

impl SystemClock {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        Local::now().format(&self.format).to_string()
    }
}

#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_uses_configured_format() {
        let stamp = SystemClock::new("%Y").timestamp();
        assert_eq!(stamp.len(), 4);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }
}
