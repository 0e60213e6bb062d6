//! Search domain update logic

use storefront_model::ProductId;

use super::SearchDomain;
use super::messages::Message;
use super::service::LookupOutcome;
use crate::infra::services::navigation::{product_path, search_path};

pub fn update(domain: &mut SearchDomain, message: Message) {
    log::trace!("Search message: {}", message.as_str());

    match message {
        Message::UpdateQuery(query) => handle_update_query(domain, query),

        Message::SearchDebounced { generation, query } => {
            // Only the last keystroke of a burst gets to run
            if generation == domain.state.debounce_generation()
                && domain.state.query == query
            {
                handle_execute_search(domain, query);
            } else {
                log::debug!(
                    "Dropping superseded debounce for '{}' (generation {})",
                    query,
                    generation
                );
            }
        }

        Message::ResultsReceived { seq, outcome } => {
            handle_results_received(domain, seq, outcome)
        }

        Message::Submit => {
            let query = domain.state.query.clone();
            handle_submit(domain, &query);
        }

        Message::ClearSearch => domain.state.clear(),

        Message::SelectResult(product_id) => {
            handle_select_result(domain, product_id)
        }

        Message::SelectSuggestion(term) => {
            domain.state.query = term.clone();
            handle_submit(domain, &term);
        }

        Message::SelectPrevious => domain.state.select_previous(),

        Message::SelectNext => domain.state.select_next(),

        Message::SelectCurrent => {
            match domain.state.get_selected().map(|product| product.id) {
                Some(product_id) => handle_select_result(domain, product_id),
                None => {
                    let query = domain.state.query.clone();
                    handle_submit(domain, &query);
                }
            }
        }
    }
}

fn handle_update_query(domain: &mut SearchDomain, query: String) {
    domain.state.query = query.clone();
    domain.state.selected_index = None;

    if query.trim().is_empty() {
        domain.state.reset_results();
        return;
    }

    let generation = domain.state.next_generation();
    let delay = domain.state.debounce_duration;
    let sender = domain.sender.clone();

    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if sender
            .send(Message::SearchDebounced { generation, query })
            .is_err()
        {
            log::debug!("Search domain dropped before debounce fired");
        }
    });
}

fn handle_execute_search(domain: &mut SearchDomain, query: String) {
    if query.trim().is_empty() {
        return;
    }

    let seq = domain.state.next_seq();

    if let Some(cached) = domain.state.get_cached_results(&query).cloned() {
        log::debug!(
            "Serving {} cached results for '{}' (seq {})",
            cached.results.len(),
            query,
            seq
        );
        domain.state.apply_results(cached.results, Some(cached.source));
        return;
    }

    log::debug!("Dispatching lookup for '{}' (seq {})", query, seq);
    domain.state.is_searching = true;

    let service = domain.service.clone();
    let sender = domain.sender.clone();

    tokio::spawn(async move {
        let outcome = service.lookup(&query).await;
        if sender
            .send(Message::ResultsReceived { seq, outcome })
            .is_err()
        {
            log::debug!("Search domain dropped before lookup settled");
        }
    });
}

fn handle_results_received(
    domain: &mut SearchDomain,
    seq: u64,
    outcome: LookupOutcome,
) {
    domain.state.history.add_metric(outcome.metrics.clone());

    if outcome.source.is_cacheable() {
        domain.state.cache_results(
            &outcome.query,
            outcome.source,
            outcome.results.clone(),
        );
    }

    if !domain.state.is_current(seq) {
        log::debug!(
            "Discarding stale results for '{}' (seq {}, latest {})",
            outcome.query,
            seq,
            domain.state.latest_seq()
        );
        return;
    }

    domain
        .state
        .apply_results(outcome.results, Some(outcome.source));
}

fn handle_submit(domain: &mut SearchDomain, query: &str) {
    if query.trim().is_empty() {
        log::debug!("Ignoring submit of an empty query");
        return;
    }

    commit(domain, query, search_path(query));
}

fn handle_select_result(domain: &mut SearchDomain, product_id: ProductId) {
    let query = domain.state.query.clone();
    commit(domain, &query, product_path(product_id));
}

/// Remember the query, navigate, and reset the search bar
fn commit(domain: &mut SearchDomain, query: &str, path: String) {
    if let Err(e) = domain.recent.record(query) {
        log::warn!("Failed to persist recent search '{}': {}", query, e);
    }

    domain.navigator.go_to(&path);
    domain.state.clear();
}
