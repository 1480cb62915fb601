//! One-shot checkout commands shared by the CLI and the wasm bindings
//!
//! Each `*_core` function rebuilds a view from a [`CheckoutRequest`], runs
//! one step of the flow and returns a [`CommandResult`]. The thin wrappers
//! without the suffix print that result for the CLI.

use anyhow::Result;
use serde_json::json;

use crate::checkout::{
    format_rupiah, CheckoutEvent, CheckoutRequest, CheckoutView, Effect, ValidationErrors,
};
use crate::config::CheckoutConfig;
use crate::error::CheckoutError;
use crate::handoff::{self, HandoffOutcome, Launcher};
use crate::CommandResult;

const RULE: &str = "----------------------------------------\n";

fn order_overview(view: &CheckoutView) -> String {
    let order = view.order();
    let mut out = String::new();
    out.push_str(RULE);
    out.push_str(&format!("Product:  {}\n", view.product().name));
    out.push_str(&format!(
        "Price:    {} / item\n",
        format_rupiah(order.unit_price())
    ));
    out.push_str(&format!("Quantity: {}\n", order.quantity()));
    out.push_str(&format!("Total:    {}\n", format_rupiah(order.total_price())));
    out.push_str(&format!("Payment:  {}\n", view.payment_method()));
    if order.is_bonus_eligible() {
        out.push_str("Bonus Spesial! Anda berhak klaim semua bonus.\n");
    }
    out.push_str(RULE);
    out
}

/// Submit the rebuilt view, turning a rejection into an error
fn submit_valid(view: &mut CheckoutView) -> Result<String> {
    match view.dispatch(CheckoutEvent::Submit) {
        Effect::Handoff { message } => Ok(message),
        Effect::Rejected | Effect::None => {
            Err(CheckoutError::Validation(view.errors().clone()).into())
        }
    }
}

fn render_errors(errors: &ValidationErrors) -> String {
    let mut out = String::new();
    for (key, message) in errors.iter() {
        out.push_str(&format!("  {}: {}\n", key.as_str(), message));
    }
    out
}

pub fn validate_core(config: &CheckoutConfig, request: &CheckoutRequest) -> Result<CommandResult> {
    let mut view = CheckoutView::from_request(config.product.clone(), request);
    view.dispatch(CheckoutEvent::Submit);
    let errors = view.errors();

    let mut out = order_overview(&view);
    if errors.is_empty() {
        out.push_str("Form is valid.\n");
    } else {
        out.push_str(&format!("Form has {} error(s):\n", errors.len()));
        out.push_str(&render_errors(errors));
    }

    let result = json!({
        "valid": errors.is_empty(),
        "errors": errors,
    });

    Ok(CommandResult {
        output: out,
        result: serde_json::to_string(&result)?,
    })
}

pub fn summary_core(config: &CheckoutConfig, request: &CheckoutRequest) -> Result<CommandResult> {
    let mut view = CheckoutView::from_request(config.product.clone(), request);
    let message = submit_valid(&mut view)?;
    let order = view.order();

    let mut out = order_overview(&view);
    out.push_str("Message:\n\n");
    out.push_str(&message);
    out.push('\n');

    let result = json!({
        "quantity": order.quantity(),
        "total": order.total_price(),
        "total_display": format_rupiah(order.total_price()),
        "bonus": order.is_bonus_eligible(),
        "breakdown": order.breakdown(),
        "message": message,
    });

    Ok(CommandResult {
        output: out,
        result: serde_json::to_string(&result)?,
    })
}

pub fn link_core(config: &CheckoutConfig, request: &CheckoutRequest) -> Result<CommandResult> {
    let mut view = CheckoutView::from_request(config.product.clone(), request);
    let message = submit_valid(&mut view)?;
    let url = config.whatsapp.url_for(&message);

    let mut out = order_overview(&view);
    out.push_str(&format!("Open this link to send the order:\n{}\n", url));

    let result = json!({ "url": url, "message": message });

    Ok(CommandResult {
        output: out,
        result: serde_json::to_string(&result)?,
    })
}

pub fn buy_core(
    config: &CheckoutConfig,
    request: &CheckoutRequest,
    launcher: &dyn Launcher,
) -> Result<CommandResult> {
    let mut view = CheckoutView::from_request(config.product.clone(), request);
    match handoff::submit(&mut view, &config.whatsapp, launcher)? {
        HandoffOutcome::Rejected(errors) => Err(CheckoutError::Validation(errors).into()),
        HandoffOutcome::Opened { url, message } => {
            let mut out = order_overview(&view);
            out.push_str("Opened WhatsApp with your order.\n");
            out.push_str("Payment instructions will follow in the chat.\n");

            let result = json!({ "url": url, "message": message });
            Ok(CommandResult {
                output: out,
                result: serde_json::to_string(&result)?,
            })
        }
    }
}

fn print_result(cmd_result: &CommandResult) {
    println!("{}", cmd_result.output);
    println!("{}", cmd_result.result);
}

pub fn validate(config: &CheckoutConfig, request: &CheckoutRequest) -> Result<bool> {
    let cmd_result = validate_core(config, request)?;
    print_result(&cmd_result);
    let parsed: serde_json::Value = serde_json::from_str(&cmd_result.result)?;
    Ok(parsed["valid"].as_bool().unwrap_or(false))
}

pub fn summary(config: &CheckoutConfig, request: &CheckoutRequest) -> Result<()> {
    print_result(&summary_core(config, request)?);
    Ok(())
}

pub fn link(config: &CheckoutConfig, request: &CheckoutRequest) -> Result<()> {
    print_result(&link_core(config, request)?);
    Ok(())
}

pub fn buy(
    config: &CheckoutConfig,
    request: &CheckoutRequest,
    launcher: &dyn Launcher,
) -> Result<()> {
    print_result(&buy_core(config, request, launcher)?);
    Ok(())
}
