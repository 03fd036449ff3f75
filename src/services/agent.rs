use std::sync::Arc;

use chrono::{Duration, Local};

use crate::models::BookingStatus;
use crate::services::ai::Message;
use crate::services::engine::BookingEngine;
use crate::state::AppState;

/// Turns sent to the completion service per request. The transcript itself
/// grows without bound; only this window leaves the process.
const CONTEXT_WINDOW: usize = 10;

/// Slots listed per day in the availability report before collapsing the
/// tail into a count, and bookings shown in the bookings report.
const REPORT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy)]
enum DirectIntent {
    Availability,
    Bookings,
}

/// Ordered rule list for requests answered straight from the engine.
/// These must reflect ground truth exactly, so they never go through the
/// completion service, which could paraphrase or hallucinate slot data.
const INTENT_RULES: &[(&[&str], DirectIntent)] = &[
    (
        &["check availability", "available slots"],
        DirectIntent::Availability,
    ),
    (
        &["show bookings", "view bookings", "my bookings"],
        DirectIntent::Bookings,
    ),
];

fn match_direct_intent(message: &str) -> Option<DirectIntent> {
    let lowered = message.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|(patterns, _)| patterns.iter().any(|p| lowered.contains(p)))
        .map(|(_, intent)| *intent)
}

/// Handles one user utterance: deterministic intents answer from the
/// engine, everything else goes to the completion service with the turf
/// catalog as system context. Completion failures are absorbed into an
/// apology reply and never propagate.
pub async fn process_message(state: &Arc<AppState>, message: &str) -> String {
    state
        .transcript
        .lock()
        .unwrap()
        .push(Message::user(message));

    if let Some(intent) = match_direct_intent(message) {
        tracing::info!(intent = ?intent, "answering from booking engine");
        let reply = {
            let engine = state.engine.lock().unwrap();
            match intent {
                DirectIntent::Availability => availability_report(&engine),
                DirectIntent::Bookings => bookings_report(&engine),
            }
        };
        state
            .transcript
            .lock()
            .unwrap()
            .push(Message::assistant(reply.clone()));
        return reply;
    }

    // Snapshot the context before the await; locks are never held across it.
    let system_prompt = {
        let engine = state.engine.lock().unwrap();
        build_system_prompt(&engine)
    };
    let recent: Vec<Message> = {
        let transcript = state.transcript.lock().unwrap();
        let start = transcript.len().saturating_sub(CONTEXT_WINDOW);
        transcript[start..].to_vec()
    };

    let reply = match state.llm.chat(&system_prompt, &recent).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, "completion service call failed");
            format!("I apologize, but I encountered an error: {e}. Please try again.")
        }
    };

    state
        .transcript
        .lock()
        .unwrap()
        .push(Message::assistant(reply.clone()));
    reply
}

fn availability_report(engine: &BookingEngine) -> String {
    let Some(turf) = engine.turfs().first() else {
        return "No turfs available at the moment.".to_string();
    };

    let today = Local::now().date_naive();
    let tomorrow = today + Duration::days(1);

    let mut info = format!("**{}** - Availability Status\n\n", turf.name);
    info.push_str(&format!("Price: ₹{}/hour\n\n", turf.price_per_hour));

    for (date, label) in [(today, "Today"), (tomorrow, "Tomorrow")] {
        let date = date.format("%Y-%m-%d").to_string();
        info.push_str(&format!("**{label} ({date}):**\n"));

        let slots = engine.available_slots(&turf.id, &date);
        if slots.is_empty() {
            info.push_str("No slots available\n\n");
        } else {
            info.push_str(&format!(
                "Available slots: {}",
                slots[..slots.len().min(REPORT_LIMIT)].join(", ")
            ));
            if slots.len() > REPORT_LIMIT {
                info.push_str(&format!(" and {} more", slots.len() - REPORT_LIMIT));
            }
            info.push_str("\n\n");
        }
    }

    info
}

fn bookings_report(engine: &BookingEngine) -> String {
    let bookings = engine.bookings();
    if bookings.is_empty() {
        return "No bookings found.".to_string();
    }

    let confirmed: Vec<_> = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed)
        .collect();
    if confirmed.is_empty() {
        return "No confirmed bookings at the moment.".to_string();
    }

    let mut info = String::from("**Current Bookings:**\n\n");
    let start = confirmed.len().saturating_sub(REPORT_LIMIT);
    for booking in &confirmed[start..] {
        info.push_str(&format!("🎫 **Booking ID:** {}\n", booking.booking_id));
        info.push_str(&format!("   Customer: {}\n", booking.customer_name));
        info.push_str(&format!(
            "   Date: {} at {}\n",
            booking.date, booking.time_slot
        ));
        info.push_str(&format!("   Amount: ₹{}\n\n", booking.total_amount));
    }

    info
}

fn build_system_prompt(engine: &BookingEngine) -> String {
    let turf_info =
        serde_json::to_string_pretty(engine.turfs()).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"You are a professional and friendly turf booking assistant for sports facility reservations.
Your name is "BookMyTurf Assistant" and you help customers book turfs for sports activities.

Available Turfs:
{turf_info}

Your capabilities:
1. Provide information about available turfs, their amenities, and pricing
2. Help customers book time slots for their preferred dates
3. Check availability for specific dates and times
4. Handle booking cancellations
5. Answer questions about facilities, pricing, and policies

Guidelines:
- Be friendly, professional, and helpful
- Ask for required information politely: customer name, phone number, preferred date, and time slot
- Confirm all details before making a booking
- Provide clear information about pricing and availability
- Format dates as YYYY-MM-DD and times in 24-hour format (HH:00)
- If a slot is unavailable, suggest alternative times
- Always confirm booking details with booking ID

When a customer wants to book:
1. Ask for their name
2. Ask for their phone number
3. Ask for preferred date (today or future dates)
4. Ask for preferred time slot
5. Confirm availability
6. Confirm booking details
7. Create the booking

For cancellations:
- Ask for the booking ID
- Confirm cancellation

Always be conversational and natural in your responses."#
    )
}
