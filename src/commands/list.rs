use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::text;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    ctx.output
        .emit_list("profiles", ctx.manager.profiles(), text::format_profile)
}
