use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use fleet_management::config::environment::EnvironmentConfig;
use fleet_management::database;
use fleet_management::routes::create_api_router;
use fleet_management::services::bootstrap::seed_default_admin;
use fleet_management::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚛 FleetPro - Backend de gestión de flota");
    info!("=========================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    database::run_migrations(&pool).await?;
    seed_default_admin(&pool, &config).await?;

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(pool, config);

    let app = create_api_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Endpoints - Auth:");
    info!("   POST /api/auth/signup - Alta de cuenta");
    info!("   POST /api/auth/authenticate - Login");
    info!("   GET  /api/auth/verify-email - Verificar email");
    info!("   POST /api/auth/set-password - Fijar contraseña inicial");
    info!("   POST /api/auth/forgot-password - Pedir reset de contraseña");
    info!("   POST /api/auth/reset-password - Restablecer contraseña");
    info!("   POST /api/auth/change-password - Cambiar contraseña");
    info!("👥 Endpoints - Users (solo ADMIN):");
    info!("   GET  /api/users - Listar usuarios");
    info!("   GET  /api/users/:id - Obtener usuario");
    info!("   PUT  /api/users/:id - Actualizar usuario");
    info!("   DELETE /api/users/:id - Eliminar usuario");
    info!("🪪 Endpoints - Drivers:");
    info!("   GET  /api/drivers - Listar conductores");
    info!("   POST /api/drivers - Crear conductor");
    info!("   GET  /api/drivers/:id - Obtener conductor");
    info!("   PUT  /api/drivers/:id - Actualizar conductor");
    info!("   DELETE /api/drivers/:id - Eliminar conductor");
    info!("🚗 Endpoints - Vehicles:");
    info!("   POST /api/vehicles - Crear vehículo");
    info!("   GET  /api/vehicles - Listar vehículos");
    info!("   GET  /api/vehicles/:id - Obtener vehículo");
    info!("   PUT  /api/vehicles/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicles/:id - Eliminar vehículo");
    info!("🧭 Endpoints - Trips:");
    info!("   GET  /api/trips - Listar viajes");
    info!("   POST /api/trips - Crear viaje");
    info!("   GET  /api/trips/:id - Obtener viaje");
    info!("   PUT  /api/trips/:id - Actualizar viaje");
    info!("   DELETE /api/trips/:id - Eliminar viaje");
    info!("   POST /api/trips/:id/start - Iniciar viaje");
    info!("   POST /api/trips/:id/complete - Completar viaje");
    info!("   GET  /api/trips/driver/:driver_id - Viajes por conductor");
    info!("   GET  /api/trips/requester/:requester_id - Viajes por solicitante");
    info!("   GET  /api/trips/status/:status - Viajes por estado");
    info!("⛽ Endpoints - Fuel:");
    info!("   GET  /api/fuel - Listar cargas");
    info!("   POST /api/fuel - Registrar carga");
    info!("   GET  /api/fuel/vehicle/:vehicle_id - Cargas por vehículo");
    info!("📊 Endpoints - Reports:");
    info!("   GET  /api/reports/overview - Resumen del sistema");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
