mod macros;
mod routes;
pub mod structs;
pub mod traits;
pub mod utils;

use std::sync::Arc;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use redis::Client;
use crate::routes::prelude::*;
use crate::utils::config::AppConfig;
use crate::utils::id_generator::TimestampIdGenerator;
use crate::utils::logging::init_tracing;
use crate::utils::seed_market::seed_market;

pub type AppError = Box<dyn std::error::Error + Send + Sync>;

pub(crate) struct AppState {
    cache: Arc<Client>,
    jwt_secret: String,
    ids: Ids,
}

/// One generator per record family, shared by every worker.
pub(crate) struct Ids {
    users: TimestampIdGenerator,
    orders: TimestampIdGenerator,
    commissions: TimestampIdGenerator,
    transactions: TimestampIdGenerator,
}

impl Default for Ids {
    fn default() -> Self {
        Self {
            users: TimestampIdGenerator::new("user"),
            orders: TimestampIdGenerator::new("order"),
            commissions: TimestampIdGenerator::new("comm"),
            transactions: TimestampIdGenerator::new("txn"),
        }
    }
}

pub async fn run() -> Result<(), AppError> {
    dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let cache = Arc::new(Client::open(config.redis_url.as_str())?);
    let ids = Ids::default();

    seed_market(cache.as_ref(), &ids.orders).await?;

    let app_state = web::Data::new(AppState {
        cache,
        jwt_secret: config.jwt_secret,
        ids,
    });

    tracing::info!(host = %config.host, port = config.port, "starting server");

    HttpServer::new(move || {
        let app = App::new()
            .app_data(app_state.clone())
            .service(register::register)
            .service(refresh::refresh)
            .service(user_info::user_info)
            .service(user_upi::user_upi)
            .service(user_deposit::user_deposit)
            .service(market::market_orders)
            .service(commission_quote::commission_quote)
            .service(order_buy::order_buy)
            .service(order_sell::order_sell)
            .service(history::history)
            .service(team_stats::team_stats)
            .service(team_commissions::team_commissions);

        #[cfg(feature = "docs")]
        let app = app.service(docs::swagger());

        app
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await?;

    Ok(())
}

#[cfg(feature = "docs")]
mod docs {
    use crate::routes::prelude::*;
    use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
    use utoipa::{Modify, OpenApi};
    use utoipa_swagger_ui::SwaggerUi;

    #[derive(OpenApi)]
    #[openapi(
        paths(
            register::register,
            refresh::refresh,
            user_info::user_info,
            user_upi::user_upi,
            user_deposit::user_deposit,
            market::market_orders,
            commission_quote::commission_quote,
            order_buy::order_buy,
            order_sell::order_sell,
            history::history,
            team_stats::team_stats,
            team_commissions::team_commissions,
        ),
        components(schemas(
            crate::utils::commission_calculator::CommissionBreakdown,
            crate::utils::process_commission::Commission,
            crate::utils::team_stats::TeamStats,
            crate::structs::order_structs::BuyOrder,
            crate::structs::order_structs::Transaction,
        )),
        modifiers(&SecurityAddon)
    )]
    struct ApiDoc;

    struct SecurityAddon;

    impl Modify for SecurityAddon {
        fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
            let components = openapi.components.get_or_insert_with(Default::default);
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            );
        }
    }

    pub fn swagger() -> SwaggerUi {
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi())
    }
}
