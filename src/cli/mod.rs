mod context;
mod flags;
mod prompts;
mod quiet;

use clap::Parser;

pub use context::{Context, Done};
pub use flags::CliFlags;

/// Parse `args` and run one non-interactive generation.
pub fn run(args: Vec<String>) {
    let flags = match CliFlags::try_parse_from(&args) {
        Ok(flags) => flags,
        Err(e) => e.exit(),
    };

    quiet::set(flags.quiet);
    crate::init_tracing(flags.verbose);

    let mut ctx = match Context::new(flags) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            std::process::exit(2);
        }
    };

    // Early exits have already reported themselves.
    let outcome = ctx.run();
    drop(ctx);
    if let Err(Done) = outcome {
        std::process::exit(1);
    }
}
