use axum::{
    extract::{
        Request,
        State,
    },
    middleware::Next,
    response::Response,
};
use fleetac::Platform;
use fleetcore::ac::agent::Agent;
use fleetrbac::Resolution;
use http::header;

/// The resolved caller of the current request.
#[derive(Clone, Debug)]
pub struct Caller {
    pub agent: Agent,
    pub resolution: Resolution,
}

/// Extract the token from an `Authorization: Bearer <token>` header.
/// Any other form of the header is treated as no token at all.
pub fn bearer_token(req: &Request) -> Option<&str> {
    let authorization = req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?;
    match authorization.split_once(' ') {
        Some((name, token)) if name == "Bearer" && !token.is_empty() => Some(token),
        _ => None,
    }
}

pub async fn resolve_caller(
    State(platform): State<Platform>,
    mut req: Request,
    next: Next,
) -> Response {
    let (agent, resolution) = platform.resolve_token(bearer_token(&req)).await;
    log::trace!("{} {} by {agent}", req.method(), req.uri());
    req.extensions_mut().insert(Caller { agent, resolution });
    next.run(req).await
}
