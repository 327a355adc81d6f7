//! Application wiring: one fetcher task translating commands into CoinGecko
//! calls, one UI task running the terminal event loop, and the unbounded
//! channels between them.
//!
//! Fetches are fire-and-forget: each command spawns its own request task and
//! completions carry the sequence token the issuing state slice handed out,
//! so overlapping requests can race freely and the commit-side guard keeps
//! only the newest.

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use tokio::sync::mpsc;

use crate::data::{Coin, CoinDetail, MarketChart};
use crate::detail::TimeRange;
use crate::request;
use crate::store::SortBy;
use crate::ui::TuiApp;

#[derive(Debug, Clone)]
pub enum FetchCommand {
    Markets {
        seq: u64,
        sort_by: SortBy,
    },
    Detail {
        seq: u64,
        id: String,
        range: TimeRange,
    },
}

#[derive(Debug)]
pub enum FetchEvent {
    Markets {
        seq: u64,
        result: Result<Vec<Coin>, String>,
    },
    Detail {
        seq: u64,
        result: Result<(CoinDetail, MarketChart), String>,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct App;

impl App {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self) -> Result<()> {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<FetchEvent>();
        let (command_tx, mut command_rx) = mpsc::unbounded_channel::<FetchCommand>();

        let fetcher = tokio::spawn(async move {
            let client = request::client::build_client().wrap_err("failed to build HTTP client")?;
            while let Some(command) = command_rx.recv().await {
                let client = client.clone();
                let tx = event_tx.clone();
                tokio::spawn(async move {
                    match command {
                        FetchCommand::Markets { seq, sort_by } => {
                            log::info!("fetching markets (seq {seq}, {})", sort_by.order_param());
                            let result = request::fetch_markets(&client, sort_by)
                                .await
                                .map_err(|err| err.to_string());
                            let _ = tx.send(FetchEvent::Markets { seq, result });
                        }
                        FetchCommand::Detail { seq, id, range } => {
                            log::info!("fetching detail for {id} (seq {seq}, {}d)", range.days());
                            let result = request::fetch_coin_and_chart(&client, &id, range)
                                .await
                                .map_err(|err| err.to_string());
                            let _ = tx.send(FetchEvent::Detail { seq, result });
                        }
                    }
                });
            }
            Ok::<(), color_eyre::Report>(())
        });

        let ui_task = tokio::spawn(async move {
            let terminal = ratatui::init();
            let app = TuiApp::new(command_tx);
            let app_result = app.run(terminal, event_rx);
            ratatui::restore();
            app_result
        });

        let ui_result = ui_task.await;

        // The UI has exited; stop servicing fetch commands.
        fetcher.abort();

        ui_result.wrap_err("UI task panicked")?
    }
}
