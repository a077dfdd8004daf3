use crate::cli::commands::required;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;
use crate::cli::{io, output};
use crate::core::services::{GoalService, TransactionService};
use crate::ledger::{parse_amount, SAVINGS_CATEGORY};

const USAGE: &str = "saving <record|pending|assign|list>";
const RECORD_USAGE: &str = "saving record <amount> [description] [--category <name>]";
const ASSIGN_USAGE: &str = "saving assign <entry> <goal>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "saving",
        "Record journal entries and assign pending savings to goals",
        USAGE,
        cmd_saving,
    )
    .signed_in()]
}

fn cmd_saving(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(format!("usage: {}", USAGE)));
    };
    match action.to_lowercase().as_str() {
        "record" => handle_record(context, rest),
        "pending" => handle_pending(context),
        "assign" => handle_assign(context, rest),
        "list" => handle_list(context),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown saving subcommand `{}`",
            other
        ))),
    }
}

fn handle_record(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let amount = parse_amount(required(args, 0, RECORD_USAGE)?);
    let mut category = SAVINGS_CATEGORY.to_string();
    let mut description = Vec::new();
    let mut rest = args[1..].iter();
    while let Some(arg) = rest.next() {
        if arg.eq_ignore_ascii_case("--category") {
            category = rest
                .next()
                .map(|value| value.to_string())
                .ok_or_else(|| CommandError::InvalidArguments(format!("usage: {}", RECORD_USAGE)))?;
        } else {
            description.push(*arg);
        }
    }
    context
        .workspace_mut()?
        .record_transaction(amount, &description.join(" "), &category)?;
    io::print_success(format!(
        "Recorded {} under `{}`.",
        context.money(amount),
        category
    ));
    Ok(())
}

fn handle_pending(context: &ShellContext) -> CommandResult {
    let pending = context.workspace()?.pending_savings();
    output::section("Pending savings");
    if pending.is_empty() {
        io::print_info("No pending savings entries.");
        return Ok(());
    }
    for (idx, entry) in pending.iter().enumerate() {
        io::print_info(format!(
            "{}. {} {}",
            idx + 1,
            context.money(entry.amount),
            entry.description
        ));
    }
    io::print_hint("Assign one with `saving assign <entry> <goal>`.");
    Ok(())
}

fn handle_assign(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let entry_ref = required(args, 0, ASSIGN_USAGE)?;
    let goal_ref = required(args, 1, ASSIGN_USAGE)?;
    let workspace = context.workspace_mut()?;
    let entry_id = TransactionService::resolve_pending(workspace.transactions(), entry_ref)?;
    let goal_id = GoalService::resolve(workspace.goals(), goal_ref)?;
    let contributed = workspace.assign_pending_savings(entry_id, goal_id)?;
    io::print_success(format!(
        "Entry assigned. Goal total: {}.",
        context.money(contributed)
    ));
    Ok(())
}

fn handle_list(context: &ShellContext) -> CommandResult {
    let entries = context.workspace()?.transactions();
    output::section("Journal");
    if entries.is_empty() {
        io::print_info("The journal is empty.");
        return Ok(());
    }
    for entry in entries {
        let state = match (entry.is_savings(), entry.assigned_goal) {
            (true, Some(_)) => " (assigned)",
            (true, None) => " (pending)",
            (false, _) => "",
        };
        io::print_info(format!(
            "{} {} {}{}",
            context.money(entry.amount),
            entry.category,
            entry.description,
            state
        ));
    }
    Ok(())
}
