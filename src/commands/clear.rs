use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
pub struct ClearResult {
    pub removed: usize,
}

pub fn run(ctx: &mut AppContext) -> AppResult<()> {
    let result = clear(ctx)?;
    let text = format!("deleted {} profiles", result.removed);
    ctx.output.emit(&text, &result)
}

pub fn clear(ctx: &mut AppContext) -> AppResult<ClearResult> {
    let removed = ctx.manager.profiles().len();
    ctx.manager.remove_all()?;
    Ok(ClearResult { removed })
}
