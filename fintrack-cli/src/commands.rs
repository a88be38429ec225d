//! Command handlers, generic over the record type

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use fintrack_client::HttpItemApi;
use fintrack_core::controllers::{DateRange, ListRenderState};
use fintrack_core::{FormController, FormEntity, ListFetcher, ListItem, ListView, MessageState};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Record types the CLI can drive
pub trait CliEntity: FormEntity + ListItem + Serialize + DeserializeOwned {}

impl<T: FormEntity + ListItem + Serialize + DeserializeOwned> CliEntity for T {}

pub struct CommandContext {
    pub api: Arc<HttpItemApi>,
    pub page_size: usize,
}

/// Print a final message on the matching stream; errors fail the process.
fn report(message: &MessageState) -> ExitCode {
    if message.is_error() {
        eprintln!("{}", message.text);
        ExitCode::FAILURE
    } else {
        if !message.text.is_empty() {
            println!("{}", message.text);
        }
        ExitCode::SUCCESS
    }
}

pub async fn list<E: CliEntity>(
    ctx: &CommandContext,
    page: usize,
    range: Option<DateRange>,
) -> Result<ExitCode> {
    let fetcher = ListFetcher::<E>::for_entity(ctx.api.clone());
    fetcher.set_date_range(range);
    fetcher.fetch_items().await;

    let state = fetcher.state();
    let mut view = ListView::for_item::<E>(ctx.page_size);
    view.paginator.go_to(page, state.items.len());

    match view.render(&state) {
        ListRenderState::Error(text) => return Ok(report(&MessageState::error(text))),
        ListRenderState::Loading | ListRenderState::Empty => {
            println!("No {}s found.", fetcher.item_name());
        }
        ListRenderState::Populated(page) => {
            for row in &page.rows {
                println!("{}", serde_json::to_string(row)?);
            }
            println!("page {}/{}", page.page, page.total_pages);
        }
    }
    Ok(ExitCode::SUCCESS)
}

pub async fn submit<E: CliEntity>(
    ctx: &CommandContext,
    fields: &[(String, String)],
) -> Result<ExitCode> {
    let form = FormController::<E>::new(ctx.api.clone());
    for (name, value) in fields {
        if !form.on_change(name, value) {
            eprintln!("Ignored {name}={value}");
        }
    }
    form.submit_editing(|| async {}).await;
    Ok(report(&form.state().message))
}

pub async fn delete<E: CliEntity>(ctx: &CommandContext, id: i64) -> Result<ExitCode> {
    let fetcher = ListFetcher::<E>::for_entity(ctx.api.clone());
    let deleted = fetcher.delete_item(id).await;
    let state = fetcher.state();
    if deleted && !state.message.is_error() {
        println!(
            "Deleted {} {id}, {} remaining.",
            fetcher.item_name(),
            state.items.len()
        );
        return Ok(ExitCode::SUCCESS);
    }
    Ok(report(&state.message))
}
