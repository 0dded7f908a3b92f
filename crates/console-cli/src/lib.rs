//! Console render CLI library

pub mod error;
pub mod request;
pub mod telemetry;

pub use error::{Error, Result};

use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Parser;
use console_serializer::{ConsoleWorkload, ContainerConverter, DiagnosticSink};
use tracing::info;

use request::{InputFormat, RenderRequest};
use telemetry::LogFormat;

/// Render workload containers into the console's JSON shape
#[derive(Parser, Debug)]
#[command(name = "console-render")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Render request file (`-` or omitted reads stdin)
    #[arg(short, long, env = "CONSOLE_RENDER_INPUT")]
    pub input: Option<PathBuf>,

    /// Input encoding, detected from the file extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<InputFormat>,

    /// Also render init containers
    #[arg(long)]
    pub init_containers: bool,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "CONSOLE_RENDER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Read the request, render it and write the payload to stdout
    pub fn run(self) -> Result<()> {
        let (input, format) = self.read_input()?;
        let request = RenderRequest::parse(&input, format)?;
        let rendered = render(&request, self.init_containers, None);

        info!(
            pod = %request.pod.name,
            containers = rendered.containers.len(),
            init_containers = rendered.init_containers.len(),
            "rendered workload"
        );

        let mut stdout = std::io::stdout().lock();
        write_payload(&mut stdout, &rendered, self.pretty)?;
        writeln!(stdout)?;
        Ok(())
    }

    fn read_input(&self) -> Result<(String, InputFormat)> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                let input = std::fs::read_to_string(path).map_err(|source| Error::Read {
                    path: path.clone(),
                    source,
                })?;
                let format = self
                    .format
                    .or_else(|| InputFormat::from_path(path))
                    .unwrap_or(InputFormat::Json);
                Ok((input, format))
            }
            _ => {
                let mut input = String::new();
                std::io::stdin().read_to_string(&mut input)?;
                Ok((input, self.format.unwrap_or(InputFormat::Json)))
            }
        }
    }
}

/// Convert a request. Init containers are left out unless asked for.
pub fn render(
    request: &RenderRequest,
    init_containers: bool,
    sink: Option<&dyn DiagnosticSink>,
) -> ConsoleWorkload {
    let mut converter = ContainerConverter::new(&request.pod, &request.volumes);
    if let Some(sink) = sink {
        converter = converter.with_sink(sink);
    }

    if init_containers {
        converter.convert_unit()
    } else {
        ConsoleWorkload {
            containers: converter.convert(&request.pod.containers),
            init_containers: Vec::new(),
        }
    }
}

/// Serialize the rendered workload as JSON
pub fn write_payload<W: Write>(writer: W, rendered: &ConsoleWorkload, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, rendered)?;
    } else {
        serde_json::to_writer(writer, rendered)?;
    }
    Ok(())
}
