use super::render::{
    print_categories, print_field_errors, print_messages, print_notification,
    print_product_details, print_product_table,
};
use super::setup::{Cli, Commands, ProductArgs};
use clap::Parser;
use prodcat::api::{CatalogApi, CmdMessage, CmdResult, ConfigAction, MessageLevel};
use prodcat::error::{CatalogError, Result};
use prodcat::form::ProductForm;
use prodcat::init::{data_dir, initialize};
use prodcat::model::{Product, ProductId};
use prodcat::store::fs_backend::FsBackend;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

/// Env var holding a tracing filter, e.g. `PRODCAT_LOG=prodcat=debug`.
const LOG_ENV: &str = "PRODCAT_LOG";

struct AppContext {
    api: CatalogApi<FsBackend>,
    preview_chars: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Add { fields, inactive }) => handle_add(&mut ctx, &fields, inactive),
        Some(Commands::Edit {
            id,
            fields,
            active,
            inactive,
        }) => {
            let status = match (active, inactive) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            handle_edit(&mut ctx, id, &fields, status)
        }
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Categories) => {
            print_categories();
            Ok(())
        }
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context() -> Result<AppContext> {
    let ctx = initialize(data_dir()?)?;
    Ok(AppContext {
        api: ctx.api,
        preview_chars: ctx.config.preview_chars,
    })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list();
    print_product_table(&result.listed_products, ctx.preview_chars);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: &ProductArgs, inactive: bool) -> Result<()> {
    let mut form = ProductForm::default();
    fields.apply_to(&mut form);
    form.is_active = !inactive;

    let result = ctx.api.submit(&form)?;
    report_submit(&result)
}

fn handle_edit(
    ctx: &mut AppContext,
    id: ProductId,
    fields: &ProductArgs,
    status: Option<bool>,
) -> Result<()> {
    let begun = ctx.api.begin_edit(id);
    let Some(mut form) = begun.form else {
        tracing::debug!(%id, "nothing to edit");
        return Ok(());
    };

    let mut changed = fields.apply_to(&mut form);
    if let Some(is_active) = status {
        changed |= form.is_active != is_active;
        form.is_active = is_active;
    }

    if !changed {
        ctx.api.cancel_edit();
        print_messages(&[CmdMessage::info("Nothing to change.")]);
        return Ok(());
    }

    let result = ctx.api.submit(&form)?;
    report_submit(&result)
}

fn report_submit(result: &CmdResult) -> Result<()> {
    if !result.is_ok() {
        print_field_errors(&result.errors);
        print_notification(result.notification.as_ref());
        return Err(CatalogError::Invalid(result.errors.len()));
    }

    print_notification(result.notification.as_ref());
    for product in &result.affected_products {
        println!("  {} {}", product.id, product.name);
    }
    Ok(())
}

fn handle_show(ctx: &AppContext, id: ProductId) -> Result<()> {
    let result = ctx.api.view(id)?;
    print_product_details(&result.listed_products);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: ProductId, yes: bool) -> Result<()> {
    let result = ctx.api.remove(id, |product| {
        yes || confirmed(confirm_delete(
            product,
            &mut io::stdin().lock(),
            &mut io::stdout(),
        ))
    })?;

    print_messages(&result.messages);
    print_notification(result.notification.as_ref());
    Ok(())
}

fn confirm_delete<R: BufRead, W: Write>(
    product: &Product,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    write!(
        output,
        "Delete product \"{}\" ({})? [Y] To delete: ",
        product.name, product.id
    )?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim() == "Y")
}

/// A prompt that could not be answered counts as a refusal.
fn confirmed(answer: io::Result<bool>) -> bool {
    answer.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not read confirmation, not deleting");
        false
    })
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.storage_path()?.display());
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(failure) = result
        .messages
        .iter()
        .find(|m| m.level == MessageLevel::Error)
    {
        return Err(CatalogError::Config(failure.content.clone()));
    }

    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            println!("storage-key = {}", config.storage_key);
            println!("preview-chars = {}", config.preview_chars);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodcat::model::seed_products;
    use std::io::{Cursor, Read};

    struct BrokenInput;

    impl Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        }
    }

    impl BufRead for BrokenInput {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    #[test]
    fn only_capital_y_confirms() {
        let product = &seed_products()[0];
        let mut out = Vec::new();

        assert!(confirm_delete(product, &mut Cursor::new("Y\n"), &mut out).unwrap());
        assert!(!confirm_delete(product, &mut Cursor::new("y\n"), &mut out).unwrap());
        assert!(!confirm_delete(product, &mut Cursor::new(""), &mut out).unwrap());

        let prompt = String::from_utf8(out).unwrap();
        assert!(prompt.starts_with("Delete product \"Laptop Gaming\" (1)? [Y] To delete: "));
    }

    #[test]
    fn unreadable_answer_declines() {
        let product = &seed_products()[0];
        let answer = confirm_delete(product, &mut BrokenInput, &mut Vec::new());
        assert!(answer.is_err());
        assert!(!confirmed(answer));
        assert!(confirmed(Ok(true)));
    }
}
