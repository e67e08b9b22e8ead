use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use ppmconv::{ConvertRequest, Header, PpmFormat};

#[derive(Parser, Debug)]
#[command(version, about = "Convert PPM images between ASCII (P3) and binary (P6) encodings")]
struct Args {
    /// Output encoding: 3 for ASCII (P3), 6 for binary (P6)
    #[arg(value_parser = parse_output_format)]
    magic: PpmFormat,
    /// Input PPM file
    input: PathBuf,
    /// Output file
    output: PathBuf,
}

fn parse_output_format(arg: &str) -> Result<PpmFormat, String> {
    match arg {
        "3" => Ok(PpmFormat::Ascii),
        "6" => Ok(PpmFormat::Binary),
        other => Err(format!(
            "unsupported output magic number `{other}` (expected 3 or 6)"
        )),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(&args.input)
        .map_err(|e| format!("cannot read {}: {e}", args.input.display()))?;

    let header = Header::from_bytes(&data)?;
    info!(
        "input: {:?} {}x{} maxval {}",
        header.format, header.width, header.height, header.maxval
    );

    let converted = ConvertRequest::new(&data, args.magic).convert()?;

    fs::write(&args.output, &converted)
        .map_err(|e| format!("cannot write {}: {e}", args.output.display()))?;
    info!("wrote {} bytes to {}", converted.len(), args.output.display());

    Ok(())
}
