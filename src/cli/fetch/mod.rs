//! Fetch command - requests ipsum text through the caching pipeline

use clap::Args;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::ipsum::{FillerType, IpsumClient, IpsumRequest};
use crate::infrastructure::logging;

#[derive(Args)]
pub struct FetchArgs {
    /// Filler style: all-meat or meat-and-filler
    #[arg(long, default_value = "all-meat")]
    pub filler: String,

    /// Number of paragraphs to request
    #[arg(long)]
    pub paras: Option<u32>,

    /// Number of sentences to request (overrides paragraphs upstream)
    #[arg(long)]
    pub sentences: Option<u32>,

    /// Start the text with the classic lorem ipsum opening
    #[arg(long)]
    pub start_with_lorem: bool,

    /// How many times to issue the same request
    #[arg(long, default_value_t = 2)]
    pub repeat: u32,
}

/// Run the fetch demo
pub async fn run(args: FetchArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let filler = args
        .filler
        .parse::<FillerType>()
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut request = IpsumRequest::new().with_filler(filler);
    if let Some(paras) = args.paras {
        request = request.with_paragraphs(paras);
    }
    if let Some(sentences) = args.sentences {
        request = request.with_sentences(sentences);
    }
    if args.start_with_lorem {
        request = request.with_start_with_lorem();
    }

    let transport = crate::create_cached_transport(&config);
    let client = IpsumClient::with_base_url(transport, &config.ipsum.base_url);

    for round in 1..=args.repeat {
        let paragraphs = client.paragraphs(&request, CancellationToken::new()).await?;
        info!(round = round, count = paragraphs.len(), "Fetched paragraphs");

        for paragraph in &paragraphs {
            println!("{}", paragraph);
        }
    }

    Ok(())
}
