use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use crate::state::AppState;

// GET /
//
// Thin landing page; the real surfaces are the JSON API and /chat.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let turf_list = {
        let engine = state.engine.lock().unwrap();
        engine
            .turfs()
            .iter()
            .map(|t| {
                format!(
                    "<li><strong>{}</strong> | {} | ₹{}/hour ({} ★, {} reviews)</li>",
                    t.name, t.location, t.price_per_hour, t.rating, t.total_reviews
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>BookMyTurf</title></head>\n<body>\n\
         <h1>BookMyTurf</h1>\n<ul>\n{turf_list}\n</ul>\n\
         <p>POST a message to <code>/chat</code> to talk to the booking assistant.</p>\n\
         </body>\n</html>"
    ))
}
