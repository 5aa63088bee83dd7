use packview::client::PackingClient;
use packview::config::AppConfig;
use packview::model::Algorithm;
use packview::reveal::{RevealEngine, SceneAdapter};
use packview::session::{ApplyOutcome, Session};
use packview::types::Vec3;

/// Scene backend that narrates every command to the terminal.
///
/// Stands in for a real renderer so the full pack-and-reveal flow can be
/// exercised from the command line.
struct ConsoleScene;

impl SceneAdapter for ConsoleScene {
    fn create_container_wireframe(&mut self, length: f64, height: f64, width: f64) {
        println!("🧊 Container wireframe {}×{}×{} (L×H×W)", length, height, width);
    }

    fn add_item_box(&mut self, name: &str, dims: Vec3, position: Vec3) {
        println!(
            "📦 + {} dims ({}, {}, {}) at ({}, {}, {})",
            name, dims.x, dims.y, dims.z, position.x, position.y, position.z
        );
    }

    fn remove_object_by_name(&mut self, name: &str) {
        println!("🗑️ - {}", name);
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = dotenvy::dotenv() {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            eprintln!("⚠️ Could not load .env: {}", err);
        }
    }

    let config = AppConfig::from_env();
    let client = match PackingClient::new(&config.client) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("❌ {}", err);
            return;
        }
    };

    let mut session = Session::with_samples();
    session.add_algorithm(Algorithm::EbAfit.id());

    println!(
        "🚀 Packing {} items into {} candidate containers via {}",
        session.items().len(),
        session.containers().len(),
        client.endpoint()
    );

    let request = match session.build_request() {
        Ok(request) => request,
        Err(err) => {
            eprintln!("❌ {}", err);
            return;
        }
    };

    let response = match client.pack(&request).await {
        Ok(response) => response,
        Err(err) => {
            // Session state is untouched; the user can fix the setup and retry.
            eprintln!("❌ {}", err);
            return;
        }
    };

    match session.apply_response(response, client.latest_request_id()) {
        ApplyOutcome::Bound(outcome) => {
            println!("📥 Bound results onto {} containers", outcome.updated_containers);
            for warning in &outcome.warnings {
                eprintln!("⚠️ {}", warning);
            }
        }
        ApplyOutcome::Stale {
            request_id,
            latest_request_id,
        } => {
            eprintln!(
                "⚠️ Dropped stale response (request {}, latest {})",
                request_id, latest_request_id
            );
            return;
        }
    }

    let Some((container, result)) = session
        .containers()
        .iter()
        .find_map(|c| c.algorithm_packing_results.first().map(|r| (c, r)))
    else {
        println!("ℹ️ The service returned no algorithm results to reveal.");
        return;
    };

    println!(
        "🎬 Revealing {} ({}): {} packed items, {}% of container volume, {} ms",
        container.name,
        result.algorithm_name,
        result.packed_count(),
        result.percent_container_volume_packed,
        result.pack_time_in_milliseconds
    );

    let mut engine = RevealEngine::new(ConsoleScene);
    engine.initialize(container, result);
    while !engine.is_complete() && engine.step_forward().is_ok() {}

    println!(
        "✅ Reveal complete: {} of {} items shown",
        engine.cursor() + 1,
        engine.item_count()
    );
}
