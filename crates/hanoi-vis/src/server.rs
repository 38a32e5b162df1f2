//! Axum web server with WebSocket streaming for visualization.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, Query, State,
    },
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use hanoi_core::{
    DiskCount, DiskPlacement, Move, MoveSequence, ReplayAction, ReplayPlan, TowerState,
    Transcript, Variant,
};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tracing::{debug, error, info, warn};

use crate::config::VisConfig;
use crate::demonstration::{Demonstration, DiskInput};
use crate::error::Result;
use crate::events::VisEvent;
use crate::playback::{self, Stage};

/// Shared application state.
pub struct AppState {
    config: VisConfig,
}

/// Visualization server.
pub struct VisServer {
    state: Arc<AppState>,
}

impl VisServer {
    /// Create a new visualization server.
    pub fn new(config: VisConfig) -> Self {
        Self {
            state: Arc::new(AppState { config }),
        }
    }

    pub fn config(&self) -> &VisConfig {
        &self.state.config
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .route("/api/health", get(health_handler))
            .route("/api/moves", get(moves_handler))
            .route("/api/run/{variant}", get(run_handler))
            .route("/api/plan", get(plan_handler))
            .route("/api/tower", get(tower_handler))
            .route("/ws", get(ws_handler))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Run the server on the configured address.
    pub async fn serve(self) -> Result<()> {
        let addr = self.state.config.addr;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Visualization server running on http://{}", addr);
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    min_disks: u8,
    max_disks: u8,
    default_disks: u8,
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        min_disks: hanoi_core::MIN_DISKS,
        max_disks: hanoi_core::MAX_DISKS,
        default_disks: state.config.default_disks.get(),
    })
}

/// Query parameters shared by the puzzle endpoints.
#[derive(Debug, Default, Deserialize)]
struct PuzzleQuery {
    n: Option<String>,
    variant: Option<String>,
}

impl PuzzleQuery {
    fn disks(&self, fallback: DiskCount) -> Result<DiskCount> {
        match &self.n {
            Some(text) => Ok(DiskCount::parse(text)?),
            None => Ok(fallback),
        }
    }

    fn variant(&self) -> Result<Variant> {
        match &self.variant {
            Some(name) => Ok(name.parse()?),
            None => Ok(Variant::Correct),
        }
    }
}

async fn moves_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PuzzleQuery>,
) -> Result<Json<MoveSequence>> {
    let n = query.disks(state.config.default_disks)?;
    let variant = query.variant()?;
    debug!("Generating {} moves for {} disks", variant, n);
    Ok(Json(variant.generate(n)))
}

async fn run_handler(
    State(state): State<Arc<AppState>>,
    Path(variant): Path<String>,
    Query(query): Query<PuzzleQuery>,
) -> Result<Json<Transcript>> {
    let variant: Variant = variant.parse()?;
    let n = query.disks(state.config.default_disks)?;
    debug!("Narrating {} run for {} disks", variant, n);
    Ok(Json(Transcript::for_run(variant, n)))
}

#[derive(Debug, Serialize)]
struct PlanResponse {
    delay_ms: u64,
    total_ms: u64,
    events: Vec<PlanEntry>,
}

#[derive(Debug, Serialize)]
struct PlanEntry {
    at_ms: u64,
    #[serde(flatten)]
    action: PlanAction,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum PlanAction {
    Move {
        index: usize,
        #[serde(rename = "move")]
        mv: Move,
    },
    Complete {
        total: usize,
    },
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

impl From<&ReplayPlan> for PlanResponse {
    fn from(plan: &ReplayPlan) -> Self {
        let events = plan
            .events()
            .iter()
            .map(|event| PlanEntry {
                at_ms: millis(event.at),
                action: match &event.action {
                    ReplayAction::Move { index, mv } => PlanAction::Move {
                        index: *index,
                        mv: mv.clone(),
                    },
                    ReplayAction::Complete { total } => PlanAction::Complete { total: *total },
                },
            })
            .collect();
        Self {
            delay_ms: millis(plan.delay()),
            total_ms: millis(plan.total_duration()),
            events,
        }
    }
}

async fn plan_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PuzzleQuery>,
) -> Result<Json<PlanResponse>> {
    let n = query.disks(state.config.default_disks)?;
    let plan = ReplayPlan::new(&Variant::Correct.generate(n));
    Ok(Json(PlanResponse::from(&plan)))
}

#[derive(Debug, Serialize)]
struct TowerResponse {
    disks: u8,
    placements: Vec<DiskPlacement>,
}

async fn tower_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PuzzleQuery>,
) -> Result<Json<TowerResponse>> {
    let n = query.disks(state.config.default_disks)?;
    Ok(Json(TowerResponse {
        disks: n.get(),
        placements: TowerState::new(n.get()).layout(),
    }))
}

/// Commands accepted over the WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WsCommand {
    Run { variant: Variant, n: DiskInput },
    Demo { n: DiskInput },
    Reset { n: DiskInput },
    Clear,
}

impl WsCommand {
    fn demonstration(self) -> Demonstration {
        let resolved = match self {
            WsCommand::Run { variant, n } => n.resolve().map(|n| Demonstration::run(variant, n)),
            WsCommand::Demo { n } => n.resolve().map(Demonstration::visual),
            WsCommand::Reset { n } => n.resolve().map(Demonstration::reset),
            WsCommand::Clear => Ok(Demonstration::clear()),
        };
        resolved.unwrap_or_else(|e| Demonstration::rejected(&e))
    }
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Turn one text frame from the page into the demonstration to play.
///
/// Unparsable frames become a single error frame.
fn command_demonstration(text: &str) -> Demonstration {
    match serde_json::from_str::<WsCommand>(text) {
        Ok(cmd) => {
            debug!("Received command: {:?}", cmd);
            cmd.demonstration()
        }
        Err(e) => {
            warn!("Unrecognized command {}: {}", text, e);
            Demonstration::error(format!("Unrecognized command: {e}"))
        }
    }
}

/// Playback state owned by one socket.
struct Connection {
    stage: Stage,
    tx: mpsc::UnboundedSender<VisEvent>,
}

impl Connection {
    /// Show the initial tower and return the frame stream for the socket.
    fn open(default_disks: DiskCount) -> (Self, mpsc::UnboundedReceiver<VisEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let conn = Self {
            stage: playback::new_stage(default_disks.get()),
            tx,
        };
        conn.start(Demonstration::reset(default_disks));
        (conn, rx)
    }

    fn start(&self, demo: Demonstration) -> JoinHandle<()> {
        playback::spawn(demo, self.stage.clone(), self.tx.clone())
    }

    fn dispatch(&self, text: &str) -> JoinHandle<()> {
        self.start(command_demonstration(text))
    }
}

async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
    info!("WebSocket client connected");

    let (conn, mut rx) = Connection::open(state.config.default_disks);

    loop {
        tokio::select! {
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        conn.dispatch(text.as_str());
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        info!("WebSocket client disconnected");
                        break;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if let Err(e) = socket.send(Message::Pong(data)).await {
                            warn!("Failed to send pong: {}", e);
                            break;
                        }
                    }
                    Some(Err(e)) => {
                        error!("WebSocket error: {}", e);
                        break;
                    }
                    _ => {}
                }
            }
            Some(event) = rx.recv() => {
                if let Err(e) = send_event(&mut socket, &event).await {
                    warn!("Failed to send {} frame: {}", event.kind(), e);
                    break;
                }
            }
        }
    }
}

async fn send_event(socket: &mut WebSocket, event: &VisEvent) -> Result<()> {
    let json = serde_json::to_string(event)?;
    socket.send(Message::Text(json.into())).await?;
    Ok(())
}
