use crate::cli::commands::required;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::{io, output};
use crate::cli::registry::CommandEntry;
use crate::core::errors::FinanceError;
use crate::core::services::AllowanceService;
use crate::ledger::{BudgetField, Computation};

const SET_USAGE: &str =
    "set <salary|other-income|rent|utilities|transport|food|other-expenses> <amount>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("set", "Set a fixed income or expense field", SET_USAGE, cmd_set)
            .signed_in(),
        CommandEntry::new(
            "income",
            "Add an extra income line",
            "income <amount>",
            cmd_income,
        )
        .signed_in(),
        CommandEntry::new(
            "expense",
            "Add an extra expense line",
            "expense <amount>",
            cmd_expense,
        )
        .signed_in(),
        CommandEntry::new(
            "compute",
            "Recompute totals, allowance and advice",
            "compute",
            cmd_compute,
        )
        .signed_in(),
        CommandEntry::new(
            "days",
            "Set days until payday and show the daily allowance",
            "days <count>",
            cmd_days,
        )
        .signed_in(),
        CommandEntry::new(
            "summary",
            "Show inputs and computed figures",
            "summary",
            cmd_summary,
        )
        .signed_in(),
        CommandEntry::new("advice", "Show spending advice", "advice", cmd_advice).signed_in(),
        CommandEntry::new(
            "reset",
            "Delete all budget and savings data for the user",
            "reset",
            cmd_reset,
        )
        .signed_in(),
    ]
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let field: BudgetField = required(args, 0, SET_USAGE)?
        .parse()
        .map_err(CommandError::InvalidArguments)?;
    let raw = args[1..].join(" ");
    let totals = context.workspace_mut()?.set_field(field, &raw)?;
    let value = context.workspace()?.snapshot().inputs.value(field);
    io::print_success(format!("{} set to {}.", field, context.money(value)));
    io::print_info(format!("Balance: {}", context.money(totals.balance)));
    Ok(())
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let amount = context.workspace_mut()?.add_extra_income(&args.join(" "))?;
    io::print_success(format!("Extra income of {} added.", context.money(amount)));
    Ok(())
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let amount = context.workspace_mut()?.add_extra_expense(&args.join(" "))?;
    io::print_success(format!("Extra expense of {} added.", context.money(amount)));
    Ok(())
}

fn cmd_compute(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.workspace_mut()?.recompute()?;
    print_totals(context)?;
    Ok(())
}

fn cmd_days(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let days = AllowanceService::parse_days(required(args, 0, "days <count>")?)?;
    let allowance = context.workspace_mut()?.set_days_remaining(days)?;
    io::print_success(format!(
        "You can spend {} per day for the next {} days.",
        context.money(allowance),
        days
    ));
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let snapshot = context.workspace()?.snapshot();
    output::section("Budget");
    let mut rows: Vec<(&str, String)> = BudgetField::ALL
        .iter()
        .map(|field| {
            let raw = snapshot.inputs.field(*field);
            let shown = if raw.is_blank() {
                "-".to_string()
            } else {
                context.money(raw.value())
            };
            (field.label(), shown)
        })
        .collect();
    rows.push(("extra income", join_amounts(context, &snapshot.inputs.extra_income_list)));
    rows.push(("extra expenses", join_amounts(context, &snapshot.inputs.extra_expense_list)));
    output::two_column(&rows);
    print_totals(context)
}

fn cmd_advice(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let snapshot = context.workspace()?.snapshot();
    if !snapshot.totals.is_computed() {
        return Err(FinanceError::NotComputed.into());
    }
    output::section("Advice");
    for message in &snapshot.advice {
        io::print_info(message);
    }
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if !context.confirm("Delete all budget and savings data?")? {
        io::print_info("Reset cancelled.");
        return Ok(());
    }
    context.workspace_mut()?.reset()?;
    io::print_success("All budget and savings data deleted.");
    Ok(())
}

fn print_totals(context: &ShellContext) -> CommandResult {
    let snapshot = context.workspace()?.snapshot();
    output::section("Totals");
    let Computation::Computed(totals) = &snapshot.totals else {
        io::print_warning("Not computed yet. Run `compute`.");
        return Ok(());
    };
    let mut rows = vec![
        ("income", context.money(totals.total_income)),
        ("expenses", context.money(totals.total_expenses)),
        ("saved", context.money(totals.total_saved)),
        ("balance", context.money(totals.balance)),
    ];
    if let (Some(days), Computation::Computed(allowance)) =
        (snapshot.days_remaining, &snapshot.daily_allowance)
    {
        rows.push(("days left", days.to_string()));
        rows.push(("per day", context.money(*allowance)));
    }
    output::two_column(&rows);
    Ok(())
}

fn join_amounts(context: &ShellContext, amounts: &[f64]) -> String {
    if amounts.is_empty() {
        return "-".into();
    }
    amounts
        .iter()
        .map(|amount| context.money(*amount))
        .collect::<Vec<_>>()
        .join(", ")
}
