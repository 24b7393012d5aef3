use std::fs::File;
use std::io::Read;

use uartframe_frame::{FrameConfig, FrameReader};

use crate::cmd::DecodeArgs;
use crate::exit::{frame_error, io_error, CliResult, SUCCESS};
use crate::output::{print_document, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let input: Box<dyn Read> = match &args.file {
        Some(path) => {
            let file = File::open(path).map_err(|err| {
                io_error(&format!("failed to open {}", path.display()), err)
            })?;
            Box::new(file)
        }
        None => Box::new(std::io::stdin()),
    };

    let mut config = FrameConfig::default();
    if let Some(max) = args.max_payload {
        config.max_payload_size = max;
    }

    let mut reader = FrameReader::with_config(input, config);
    let (value, payload) = reader
        .read_document()
        .map_err(|err| frame_error("frame read failed", err))?;

    print_document(&value, &payload, format);
    Ok(SUCCESS)
}
