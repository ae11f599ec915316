use clap::Parser;
use log::{error, info};
use std::io::{self, Write};
use std::path::PathBuf;
use word_sniffer::{
    report_top_words, OutputFormat, WordSnifferConfig, DEFAULT_DOCUMENTS_PATH,
    DEFAULT_NUMBER_OF_TOP_WORDS,
};

/// Print the most common words in a directory of text documents, together with every
/// sentence they appear in.
#[derive(Parser, Debug)]
#[command(name = "word-sniffer-cli", version, about)]
struct Cli {
    /// Directory whose top-level files are analysed (subdirectories are ignored)
    #[arg(env = "WORD_SNIFFER_DOCUMENTS_PATH", default_value = DEFAULT_DOCUMENTS_PATH)]
    documents_path: PathBuf,

    /// Number of most common words to report
    #[arg(
        short = 'n',
        long = "top",
        env = "WORD_SNIFFER_TOP_WORDS",
        default_value_t = DEFAULT_NUMBER_OF_TOP_WORDS
    )]
    number_of_top_words: usize,

    /// Report format: `text` or `csv`
    #[arg(long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let cli = Cli::parse();

    let config = WordSnifferConfig::new(cli.documents_path, cli.number_of_top_words)
        .with_output_format(cli.format);

    info!("Running with {:?}", config);

    // The report is fully rendered before anything reaches stdout
    match report_top_words(&config) {
        Ok(report) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(report.as_bytes()).and_then(|_| stdout.flush()) {
                error!("Failed to write report: {}", e);
                #[cfg(not(feature = "logger-support"))]
                eprintln!("Failed to write report: {}", e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            error!("Error reporting top words: {}", e);
            #[cfg(not(feature = "logger-support"))]
            eprintln!("Error reporting top words: {}", e);
            std::process::exit(1);
        }
    }
}
