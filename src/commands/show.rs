use crate::cli::ShowArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::text;

pub fn run(ctx: &mut AppContext, args: ShowArgs) -> AppResult<()> {
    let profile = ctx.manager.load_into_draft(&args.username)?;
    ctx.output.emit(&text::format_profile(&profile), &profile)
}
