use serde::Serialize;

use crate::cli::RmArgs;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
pub struct RemoveResult {
    pub username: String,
    pub removed: bool,
}

pub fn run(ctx: &mut AppContext, args: RmArgs) -> AppResult<()> {
    let result = remove(ctx, args)?;
    let text = if result.removed {
        format!("deleted @{}", result.username)
    } else {
        format!("no profile named {}", result.username)
    };

    ctx.output.emit(&text, &result)
}

pub fn remove(ctx: &mut AppContext, args: RmArgs) -> AppResult<RemoveResult> {
    let removed = ctx.manager.remove(&args.username)?;
    Ok(RemoveResult {
        username: args.username,
        removed,
    })
}
