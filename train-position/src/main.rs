use std::process::ExitCode;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use train_position::domain::HeaderLang;
use train_position::resolver::{HeaderTag, ResolverConfig, TrainPositionContext};
use train_position::topology::{
    CacheConfig, SnapshotError, TopologyCache, TopologyKey, TopologySnapshot,
};

/// Environment variable naming the snapshot when no argument is given.
const SNAPSHOT_ENV: &str = "TRAIN_POSITION_SNAPSHOT";

#[derive(Debug, thiserror::Error)]
enum ReplayError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("failed to encode resolution: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Cache key for the snapshot's station list.
fn topology_key(snapshot: &TopologySnapshot) -> TopologyKey {
    let line = snapshot
        .selected_line
        .as_ref()
        .map(|l| l.id)
        .or_else(|| snapshot.stations.first().and_then(|s| s.line_id()))
        .unwrap_or_default();
    match &snapshot.train_type {
        Some(train_type) => TopologyKey::with_train_type(line, train_type.id),
        None => TopologyKey::line(line),
    }
}

/// Resolve every frame of the snapshot at `path`, printing one JSON line
/// per frame. Returns the number of frames.
async fn replay(path: &str) -> Result<usize, ReplayError> {
    let snapshot = TopologySnapshot::load(path)?;
    info!(
        path,
        stations = snapshot.stations.len(),
        frames = snapshot.frames.len(),
        "loaded snapshot"
    );

    let cache = TopologyCache::new(&CacheConfig::default());
    let key = topology_key(&snapshot);
    let loaded = cache.replace(key, snapshot.stations.clone()).await;

    let config = ResolverConfig::default();
    let mut header = HeaderTag::default();
    let mut has_next = false;

    for frame in &snapshot.frames {
        let stations = cache.get(&key).await.unwrap_or_else(|| Arc::clone(&loaded));
        let mut ctx = TrainPositionContext::from_snapshot(&snapshot, stations, frame);
        if frame.header_state.is_none() {
            ctx.header =
                header.advance(frame.arrived, frame.approaching, has_next, &HeaderLang::ALL);
        }

        let resolution = ctx.resolve(&config);
        header = resolution.header;
        has_next = resolution.next.is_some();

        println!("{}", serde_json::to_string(&resolution)?);
    }

    Ok(snapshot.frames.len())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let Some(path) = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(SNAPSHOT_ENV).ok())
    else {
        eprintln!("Usage: train-position <snapshot.json> (or set {SNAPSHOT_ENV})");
        return ExitCode::FAILURE;
    };

    match replay(&path).await {
        Ok(frames) => {
            info!(frames, "replay finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
