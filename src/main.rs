use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vehicle_inventory::config::{DatabaseConfig, EnvironmentConfig};
use vehicle_inventory::database::DatabaseConnection;
use vehicle_inventory::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    init_tracing(&config);

    info!("🚗 Vehicle Inventory API");
    info!("========================");

    // Inicializar base de datos (schema incluido) antes de aceptar peticiones
    let db_connection = match DatabaseConnection::new(&DatabaseConfig::default()).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = db_connection.initialize().await {
        error!("❌ Error aplicando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migración: {}", e));
    }

    let pool = db_connection.pool().clone();
    let app = create_router(AppState::new(pool, config.clone()));

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /                - Home");
    info!("   GET    /vehicle         - Listar vehículos");
    info!("   POST   /vehicle         - Crear vehículo");
    info!("   GET    /vehicle/:vin    - Obtener vehículo");
    info!("   PUT    /vehicle/:vin    - Actualizar vehículo");
    info!("   DELETE /vehicle/:vin    - Eliminar vehículo");
    info!("   GET    /sold-vehicles   - Ventas de vehículos en inventario");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// RUST_LOG manda; si no está definido, debug en desarrollo e info en el resto
fn init_tracing(config: &EnvironmentConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let default_level = if config.is_development() { "debug" } else { "info" };
        EnvFilter::new(format!(
            "{},hyper=info,tower=info,sqlx=warn",
            default_level
        ))
    });

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
