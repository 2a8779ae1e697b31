use crate::cli::Cli;
use crate::context::AppContext;
use crate::dump;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        hex_ids,
        profile_dir,
        output_dir,
    } = cli;

    let ctx = AppContext::bootstrap(hex_ids);

    dump::run(&ctx, &profile_dir, &output_dir)
}
