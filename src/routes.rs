use crate::{
    api::{attendance, departments, personnel, reports},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{Scope, web};
use tracing::{info, warn};

/// Per-IP limiter; `0` requests per minute disables limiting.
fn build_limiter(requests_per_min: u32) -> Option<Governor<PeerIpKeyExtractor, NoOpMiddleware>> {
    if requests_per_min == 0 {
        info!("Rate limiting disabled");
        return None;
    }

    let per_ms = (60_000 / requests_per_min as u64).max(1);
    match GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
    {
        Some(cfg) => Some(Governor::new(&cfg)),
        None => {
            warn!(requests_per_min, "Invalid rate limit, limiter disabled");
            None
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    let scope = api_scope(&config.api_prefix);

    match build_limiter(config.rate_per_min) {
        Some(limiter) => cfg.service(scope.wrap(limiter)),
        None => cfg.service(scope),
    };
}

pub fn api_scope(prefix: &str) -> Scope {
    web::scope(prefix)
        .service(
            web::scope("/personnel")
                // /personnel
                .service(
                    web::resource("")
                        .route(web::post().to(personnel::create_personnel))
                        .route(web::get().to(personnel::list_personnel)),
                )
                // /personnel/{id}
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(personnel::get_personnel))
                        .route(web::put().to(personnel::update_personnel))
                        .route(web::delete().to(personnel::delete_personnel)),
                ),
        )
        .service(
            web::scope("/departments")
                .service(
                    web::resource("")
                        .route(web::get().to(departments::list_departments))
                        .route(web::post().to(departments::create_department)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::put().to(departments::update_department))
                        .route(web::delete().to(departments::delete_department)),
                ),
        )
        .service(
            web::scope("/attendance")
                .service(web::resource("").route(web::get().to(attendance::list_attendance)))
                .service(web::resource("/today").route(web::get().to(attendance::today_attendance)))
                .service(web::resource("/month").route(web::get().to(attendance::month_attendance)))
                .service(web::resource("/check-in").route(web::post().to(attendance::check_in)))
                .service(web::resource("/check-out").route(web::post().to(attendance::check_out)))
                .service(
                    web::resource("/status/{personnel_id}")
                        .route(web::get().to(attendance::attendance_status)),
                )
                // /attendance/{id}
                .service(
                    web::resource("/{id}").route(web::delete().to(attendance::delete_attendance)),
                ),
        )
        .service(
            web::scope("/reports")
                .service(web::resource("/summary").route(web::get().to(reports::summary)))
                .service(
                    web::resource("/attendance.csv").route(web::get().to(reports::attendance_csv)),
                )
                .service(
                    web::resource("/personnel.csv").route(web::get().to(reports::personnel_csv)),
                ),
        )
}
