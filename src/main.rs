//! Application entry point — Korean voice-order console.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Load the menu catalog — a substitute TOML file from config or the
//!    config dir, falling back to the built-in menu.
//! 4. Build the order extractor and the LLM corrector (fail-open wrapper, or
//!    passthrough when correction is disabled).
//! 5. Process the transcript given as CLI arguments, or run a stdin
//!    read-eval loop and print a receipt per utterance.

use std::io::Write;
use std::sync::Arc;

use voice_order::{
    config::{AppConfig, AppPaths},
    llm::{ApiCorrector, FallbackCorrector, PassthroughCorrector, TextCorrector},
    menu::MenuCatalog,
    order::OrderExtractor,
    pipeline::{OrderOutcome, OrderPipeline},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("voice-order starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Menu catalog — explicit path from config, then the conventional
    //    menu.toml in the config dir, then the built-in menu.
    let menu_file = AppPaths::new().menu_file;
    let catalog = match &config.menu.catalog_file {
        Some(path) => {
            log::info!("loading menu catalog from {}", path.display());
            MenuCatalog::load_from(path)?
        }
        None if menu_file.exists() => {
            log::info!("loading menu catalog from {}", menu_file.display());
            MenuCatalog::load_from(&menu_file)?
        }
        None => MenuCatalog::default(),
    };
    log::info!("menu catalog ready ({} items)", catalog.len());

    // 4. Extractor + corrector
    let extractor = OrderExtractor::new(&catalog)?;

    let corrector: Arc<dyn TextCorrector> = if config.llm.enabled {
        Arc::new(FallbackCorrector::new(ApiCorrector::from_config(
            &config.llm,
            &catalog,
        )))
    } else {
        log::info!("LLM correction disabled — extracting from raw transcripts");
        Arc::new(PassthroughCorrector)
    };

    let pipeline = OrderPipeline::new(corrector, extractor);

    // 5. One-shot from CLI arguments, or interactive loop
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        run_repl(&pipeline, &catalog).await?;
    } else {
        let outcome = pipeline.process_transcript(&args.join(" ")).await;
        print_receipt(&outcome, &catalog);
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Interactive loop
// ---------------------------------------------------------------------------

/// Read utterances from stdin until EOF or `q`, printing a receipt for each.
async fn run_repl(pipeline: &OrderPipeline, catalog: &MenuCatalog) -> anyhow::Result<()> {
    println!("주문 문장을 입력하세요 ('q' 입력 시 종료)");

    loop {
        print!("주문> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            break;
        }
        if line.is_empty() {
            continue;
        }

        let outcome = pipeline.process_transcript(line).await;
        print_receipt(&outcome, catalog);
    }

    println!("프로그램을 종료합니다.");
    Ok(())
}

// ---------------------------------------------------------------------------
// Receipt printing
// ---------------------------------------------------------------------------

/// Print both text stages and the extracted order as a cashier receipt.
fn print_receipt(outcome: &OrderOutcome, catalog: &MenuCatalog) {
    println!("원본 텍스트: {}", outcome.original_text);
    if outcome.corrected_text != outcome.original_text {
        println!("교정된 텍스트: {}", outcome.corrected_text);
    }

    if outcome.order.is_empty() {
        println!("메뉴를 정확히 인식하지 못했습니다. 다시 말씀해주세요.");
        return;
    }

    for line in outcome.order.lines() {
        let unit = catalog.get(&line.name).map_or(0, |item| item.price);
        let subtotal = u64::from(unit) * u64::from(line.quantity);
        println!("{} {}개 — {}원", line.name, line.quantity, subtotal);
    }
    println!("합계: {}원", outcome.order.total_price(catalog));
}
