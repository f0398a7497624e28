use actix::Actor;
use std::sync::Arc;
use chrono::{Duration as ChronoDuration, Utc};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use laundry_storefront::actors::{
    GetSnapshot, GoNext, HoverEnter, MountView, Shutdown, UnmountView, ViewCoordinator,
};
use laundry_storefront::domain::order::{
    FulfillmentStep, HistoryView, InMemoryOrderSource, Order, OrderQueryHandler, TrackerView,
};
use laundry_storefront::domain::Session;
use laundry_storefront::metrics::Metrics;
use laundry_storefront::rotation::{Paginator, RotatingView};

#[actix::main]
async fn main() -> anyhow::Result<()> {
    // Default to INFO level, override with RUST_LOG
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,laundry_storefront=debug"))
        )
        .init();

    tracing::info!("Starting laundry storefront presentation demo");

    let metrics = Arc::new(Metrics::new()?);

    // === 1. Order progress for a signed-in customer ===
    let session = Session::new(Uuid::new_v4(), "Demo Customer");
    let now = Utc::now();

    let mut source = InMemoryOrderSource::new();

    let mut delivered = Order::with_canonical_flow(
        Uuid::new_v4().to_string(),
        now - ChronoDuration::days(6),
        "10am - 12pm",
        "Cash on delivery",
    );
    for step in delivered.flow.iter_mut() {
        *step = FulfillmentStep::done(step.label.clone(), Some(now - ChronoDuration::days(5)));
    }
    source.insert(session.user_id, delivered);

    let mut current = Order::with_canonical_flow(Uuid::new_v4().to_string(), now, "4pm - 6pm", "UPI");
    current.total_amount = 349.0;
    current.total_item_count = 9;
    current.flow[0] = FulfillmentStep::done("Order placed", Some(now));
    current.flow[1] = FulfillmentStep::done("Agent arriving", None);
    source.insert(session.user_id, current);

    let queries = OrderQueryHandler::new(Arc::new(source)).with_metrics(metrics.clone());

    match queries.tracker(&session)? {
        TrackerView::Tracking(progress) => tracing::info!(
            order_id = %progress.order_id,
            status = progress.status.display_label(),
            current_step = progress.current_step_label().unwrap_or("finished"),
            "Tracking latest order"
        ),
        TrackerView::NoOrder => tracing::info!("No order to track"),
    }

    match queries.history(&session)? {
        HistoryView::Orders(entries) => {
            for entry in entries {
                tracing::info!(
                    placed_at = %entry.placed_at,
                    status = entry.progress.status.display_label(),
                    completed = entry.progress.completed_steps,
                    total = entry.progress.total_steps,
                    "History entry"
                );
            }
        }
        HistoryView::NoHistory => tracing::info!("No order history"),
    }

    // === 2. Rotating views on the landing page ===
    let testimonials: Vec<&str> = vec![
        "Crisp shirts every week",
        "Pickup was right on time",
        "Stains I had given up on, gone",
        "Folded better than I ever do",
        "Great app, great service",
        "Delivery agent was polite",
        "Affordable and fast",
    ];
    let pager = Paginator::new(testimonials.len(), 3);

    let coordinator = ViewCoordinator::new().with_metrics(metrics.clone()).start();

    let hero = coordinator
        .send(MountView { view: RotatingView::HeroBanner, total_items: 4 })
        .await?;
    let pager_view = coordinator
        .send(MountView { view: RotatingView::Testimonials, total_items: testimonials.len() })
        .await?;
    let steps = coordinator
        .send(MountView { view: RotatingView::StepHighlighter, total_items: 4 })
        .await?;

    // User pages the testimonials once: autoplay stops for good
    let page = pager_view.send(GoNext).await?;
    tracing::info!(page, items = ?pager.page(&testimonials, page), "Testimonial page");

    hero.send(GoNext).await?;
    steps.send(HoverEnter(3)).await?;

    tokio::time::sleep(std::time::Duration::from_secs(6)).await;

    for addr in [&hero, &pager_view, &steps] {
        let snapshot = addr.send(GetSnapshot).await?;
        tracing::info!(
            view = snapshot.view.name(),
            index = snapshot.current_index,
            state = ?snapshot.state,
            timer_armed = snapshot.timer_armed,
            "Rotation snapshot"
        );
    }

    // === 3. Teardown ===
    coordinator.send(UnmountView(RotatingView::StepHighlighter)).await?;
    coordinator
        .send(Shutdown)
        .await?
        .map_err(|e| anyhow::anyhow!("Shutdown failed: {}", e))?;

    tracing::debug!(metrics = %metrics.encode_text()?, "Final metrics");
    tracing::info!("Demo complete");

    Ok(())
}
