use tracing::info;
use uartframe_frame::{FrameConfig, FrameReader};
use uartframe_port::SerialPort;

use crate::cmd::ReadArgs;
use crate::exit::{frame_error, port_error, CliResult, SUCCESS};
use crate::output::{print_document, OutputFormat};

pub fn run(args: ReadArgs, format: OutputFormat) -> CliResult<i32> {
    let port = SerialPort::open(&args.device, args.baud)
        .map_err(|err| port_error("failed to open UART port", err))?;
    info!(
        device = %port.path().display(),
        baud = port.baud_rate(),
        "waiting for one frame"
    );

    let mut config = FrameConfig::default();
    if let Some(max) = args.max_payload {
        config.max_payload_size = max;
    }

    let mut reader = FrameReader::with_config(port, config);
    let (value, payload) = reader
        .read_document()
        .map_err(|err| frame_error("frame read failed", err))?;
    info!(bytes = payload.len(), "frame received");

    print_document(&value, &payload, format);
    Ok(SUCCESS)
}
