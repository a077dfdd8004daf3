use crate::cli::commands::required;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;
use crate::cli::{io, output};
use crate::core::services::{GoalDraft, GoalService};
use crate::ledger::parse_amount;

const USAGE: &str = "goal <create|contribute|delete|list>";
const CREATE_USAGE: &str = "goal create <name> <target> [initial] [--bonus]";
const CONTRIBUTE_USAGE: &str = "goal contribute <goal> <amount>";
const DELETE_USAGE: &str = "goal delete <goal>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new("goal", "Manage savings goals", USAGE, cmd_goal).signed_in()]
}

fn cmd_goal(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(format!("usage: {}", USAGE)));
    };
    match action.to_lowercase().as_str() {
        "create" | "add" => handle_create(context, rest),
        "contribute" => handle_contribute(context, rest),
        "delete" | "remove" => handle_delete(context, rest),
        "list" => handle_list(context),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown goal subcommand `{}`",
            other
        ))),
    }
}

fn handle_create(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let is_bonus = args.iter().any(|arg| arg.eq_ignore_ascii_case("--bonus"));
    let positional: Vec<&str> = args
        .iter()
        .copied()
        .filter(|arg| !arg.eq_ignore_ascii_case("--bonus"))
        .collect();
    let name = required(&positional, 0, CREATE_USAGE)?;
    let target = parse_amount(required(&positional, 1, CREATE_USAGE)?);
    let initial = positional.get(2).map(|raw| parse_amount(raw)).unwrap_or(0.0);

    let draft = GoalDraft::new(name, target)
        .with_initial(initial)
        .bonus(is_bonus);
    context.workspace_mut()?.create_goal(draft)?;
    io::print_success(format!(
        "Goal `{}` created with a target of {}.",
        name.trim(),
        context.money(target)
    ));
    Ok(())
}

fn handle_contribute(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let reference = required(args, 0, CONTRIBUTE_USAGE)?;
    let amount = parse_amount(required(args, 1, CONTRIBUTE_USAGE)?);
    let workspace = context.workspace_mut()?;
    let goal_id = GoalService::resolve(workspace.goals(), reference)?;
    let contributed = workspace.contribute(goal_id, amount)?;
    io::print_success(format!(
        "Contribution recorded. Saved so far: {}.",
        context.money(contributed)
    ));
    Ok(())
}

fn handle_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let reference = required(args, 0, DELETE_USAGE)?;
    let goal_id = GoalService::resolve(context.workspace()?.goals(), reference)?;
    if !context.confirm("Delete this goal and its contribution history?")? {
        io::print_info("Goal kept.");
        return Ok(());
    }
    let removed = context.workspace_mut()?.delete_goal(goal_id)?;
    io::print_success(format!("Goal `{}` deleted.", removed.name));
    Ok(())
}

fn handle_list(context: &ShellContext) -> CommandResult {
    let goals = context.workspace()?.goals();
    output::section("Goals");
    if goals.is_empty() {
        io::print_info("No goals yet. Create one with `goal create`.");
        return Ok(());
    }
    for (idx, goal) in goals.iter().enumerate() {
        let status = if goal.is_complete() {
            " (complete)"
        } else {
            ""
        };
        let bonus = if goal.is_bonus { " [bonus]" } else { "" };
        io::print_info(format!(
            "{}. {}{}{}: {} of {} ({:.0}%), {} to go",
            idx + 1,
            goal.name,
            bonus,
            status,
            context.money(goal.contributed()),
            context.money(goal.target),
            goal.progress_percent(),
            context.money(goal.remaining()),
        ));
    }
    Ok(())
}
