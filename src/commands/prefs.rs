use crate::context::AppContext;
use crate::error::AppResult;
use crate::profile::Preference;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    ctx.output.emit_list("preferences", Preference::ALL.as_slice(), |pref| {
        pref.label().to_string()
    })
}
