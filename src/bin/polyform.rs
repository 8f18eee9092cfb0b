use clap::Parser;
use polyform::capture::CaptureFolder;
use polyform::convertors::{ConvertConfig, OutputFormat};
use polyform::io::object_from_json;

#[derive(Parser)]
#[command(version, about, author)]
struct PolyformCli {
    /// path to the unzipped capture folder
    data_folder_path: String,

    /// output format: ["ingp", "instant-ngp", "ingp-multifile"]
    #[arg(default_value = "ingp")]
    format: String,

    /// optional convertor config json
    #[arg(long)]
    config: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("LOG_LEVEL", "info"))
        .init();
    let cli = PolyformCli::parse();

    let format: OutputFormat = match cli.format.parse() {
        Ok(format) => format,
        Err(_) => {
            log::error!(
                "Format {} is not currently supported. Consider adding a convertor for it",
                cli.format
            );
            std::process::exit(1);
        }
    };
    let config: ConvertConfig = match &cli.config {
        Some(path) => match object_from_json(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to read config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => ConvertConfig::default(),
    };

    let folder = CaptureFolder::new(&cli.data_folder_path);
    let convertor = format.convertor(config);
    if let Err(e) = convertor.convert(&folder) {
        log::error!("Conversion of {} failed: {}", folder.root.display(), e);
        std::process::exit(1);
    }
}
