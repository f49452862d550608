use tracing::info;

use hlscog::TranslateParams;
use hlscog::api::translate_granule;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if args.blocksize == 0 {
        return Err(AppError::ZeroBlocksize {
            blocksize: args.blocksize,
        }
        .into());
    }

    let params = TranslateParams {
        product: args.product,
        profile: args.cog_profile,
        blocksize: args.blocksize,
        creation_options: args.creation_options,
        debug_mode: args.debug_mode,
    };

    let produced = translate_granule(&args.input, &args.output_dir, &params)?;
    info!(
        "Successfully translated: {:?} -> {} file(s)\n",
        args.input,
        produced.len()
    );

    Ok(())
}
