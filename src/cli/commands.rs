//! Shell command handlers. Each one reads or mutates the dashboard held by the
//! [`ShellContext`] and prints through [`crate::cli::output`].

use crate::cli::core::{CliMode, CommandError, CommandResult, LoopControl, ShellContext};
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::render::{self, RenderContext};
use crate::cli::{help, io as cli_io, output};
use crate::core::validation::RawDraft;
use crate::core::services::YearRangeService;
use crate::domain::{catalog_for, MonthFilter, TransactionId, TransactionKind};
use crate::utils::build_info;

pub fn register_all(registry: &mut CommandRegistry) {
    let entries = [
        CommandEntry {
            name: "add",
            aliases: &["new"],
            description: "Record an income or expense",
            usage: "add <income|expense> <category> <amount> <YYYY-MM-DD> [description]",
            handler: cmd_add,
        },
        CommandEntry {
            name: "delete",
            aliases: &["rm"],
            description: "Remove a transaction by id",
            usage: "delete <id>",
            handler: cmd_delete,
        },
        CommandEntry {
            name: "year",
            aliases: &[],
            description: "Select the year to analyze",
            usage: "year <YYYY>",
            handler: cmd_year,
        },
        CommandEntry {
            name: "month",
            aliases: &[],
            description: "Select a month or all months",
            usage: "month <all|1..12|name>",
            handler: cmd_month,
        },
        CommandEntry {
            name: "filter",
            aliases: &["period"],
            description: "Show the selected period, or set year and month together",
            usage: "filter [<YYYY> [<month>]]",
            handler: cmd_filter,
        },
        CommandEntry {
            name: "list",
            aliases: &["ls"],
            description: "List transactions in the selected period",
            usage: "list",
            handler: cmd_list,
        },
        CommandEntry {
            name: "summary",
            aliases: &[],
            description: "Income, expenses and balance for the period",
            usage: "summary",
            handler: cmd_summary,
        },
        CommandEntry {
            name: "monthly",
            aliases: &[],
            description: "Month by month income and expense totals",
            usage: "monthly",
            handler: cmd_monthly,
        },
        CommandEntry {
            name: "categories",
            aliases: &[],
            description: "Expense totals per category, largest first",
            usage: "categories",
            handler: cmd_categories,
        },
        CommandEntry {
            name: "years",
            aliases: &[],
            description: "Selectable years, newest first",
            usage: "years",
            handler: cmd_years,
        },
        CommandEntry {
            name: "catalog",
            aliases: &[],
            description: "Suggested categories per transaction type",
            usage: "catalog [income|expense]",
            handler: cmd_catalog,
        },
        CommandEntry {
            name: "version",
            aliases: &[],
            description: "Show build information",
            usage: "version",
            handler: cmd_version,
        },
        CommandEntry {
            name: "help",
            aliases: &["?"],
            description: "List commands or describe one",
            usage: "help [command]",
            handler: cmd_help,
        },
        CommandEntry {
            name: "exit",
            aliases: &["quit", "q"],
            description: "Leave the shell",
            usage: "exit",
            handler: cmd_exit,
        },
    ];
    for entry in entries {
        registry.register(entry);
    }
}

fn render_context(context: &ShellContext) -> RenderContext<'_> {
    RenderContext {
        locale: &context.locale,
        currency: &context.currency,
    }
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let field = |index: usize| args.get(index).copied().unwrap_or_default().to_string();
    let raw = RawDraft {
        kind: field(0),
        category: field(1),
        amount: field(2),
        date: field(3),
        description: args.get(4..).map(|rest| rest.join(" ")).unwrap_or_default(),
    };
    let transaction = context.dashboard.add_transaction(&raw)?;
    let ctx = render_context(context);
    output::success(format!(
        "Transaction added: {} ({} {} {})",
        transaction.id,
        transaction.kind,
        transaction.category,
        ctx.money(transaction.amount)
    ));
    Ok(LoopControl::Continue)
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [id] = args else {
        return Err(CommandError::InvalidArguments("usage: delete <id>".into()));
    };
    let id = TransactionId::new(*id);
    if context.mode == CliMode::Interactive && context.dashboard.store().contains(&id) {
        let confirmed = cli_io::confirm_action(&format!("Delete transaction {id}?"), false)?;
        if !confirmed {
            output::info("Deletion cancelled.");
            return Ok(LoopControl::Continue);
        }
    }
    match context.dashboard.delete_transaction(&id) {
        Some(removed) => output::success(format!("Transaction {} removed.", removed.id)),
        None => output::warning(format!("No transaction with id `{id}`.")),
    }
    Ok(LoopControl::Continue)
}

fn parse_year(context: &ShellContext, value: &str) -> Result<i32, CommandError> {
    let selectable = context.dashboard.available_years();
    if !selectable.iter().any(|year| year == value.trim()) {
        return Err(CommandError::InvalidArguments(format!(
            "`{value}` is not a selectable year. Run `years` to see the options."
        )));
    }
    value
        .trim()
        .parse::<i32>()
        .map_err(|err| CommandError::InvalidArguments(format!("invalid year `{value}`: {err}")))
}

fn parse_month(value: &str) -> Result<MonthFilter, CommandError> {
    value
        .parse::<MonthFilter>()
        .map_err(CommandError::InvalidArguments)
}

fn print_filter(context: &ShellContext) {
    let view = context.dashboard.view();
    let ctx = render_context(context);
    output::info(render::filter_line(&ctx, &view.filter, view.transactions.len()));
}

fn cmd_year(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [value] = args else {
        return Err(CommandError::InvalidArguments("usage: year <YYYY>".into()));
    };
    let year = parse_year(context, value)?;
    context.dashboard.set_year(year);
    print_filter(context);
    Ok(LoopControl::Continue)
}

fn cmd_month(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [value] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: month <all|1..12|name>".into(),
        ));
    };
    let month = parse_month(value)?;
    context.dashboard.set_month(month);
    print_filter(context);
    Ok(LoopControl::Continue)
}

fn cmd_filter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {}
        [year] => {
            let year = parse_year(context, year)?;
            context.dashboard.set_year(year);
        }
        [year, month] => {
            let year = parse_year(context, year)?;
            let month = parse_month(month)?;
            let mut filter = context.dashboard.filter();
            filter.year = year;
            filter.month = month;
            context.dashboard.set_filter(filter);
        }
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: filter [<YYYY> [<month>]]".into(),
            ))
        }
    }
    print_filter(context);
    Ok(LoopControl::Continue)
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let view = context.dashboard.view();
    let ctx = render_context(context);
    output::section(format!("Transactions: {}", ctx.period(&view.filter)));
    output::lines(&render::transactions(&ctx, &view.transactions));
    Ok(LoopControl::Continue)
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let view = context.dashboard.view();
    let ctx = render_context(context);
    output::section(format!("Summary: {}", ctx.period(&view.filter)));
    let mut lines = render::summary(&ctx, &view);
    if let Some(balance) = lines.pop() {
        output::lines(&lines);
        output::info(output::signed(&balance, view.summary.balance));
    }
    Ok(LoopControl::Continue)
}

fn cmd_monthly(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let view = context.dashboard.view();
    let ctx = render_context(context);
    output::section(format!("Monthly totals: {}", ctx.period(&view.filter)));
    output::lines(&render::monthly(&ctx, &view.monthly));
    Ok(LoopControl::Continue)
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let view = context.dashboard.view();
    let ctx = render_context(context);
    output::section(format!("Expenses by category: {}", ctx.period(&view.filter)));
    output::lines(&render::categories(&ctx, &view.expenses_by_category));
    Ok(LoopControl::Continue)
}

fn cmd_years(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let years = context.dashboard.available_years();
    let clock = context.dashboard.clock();
    output::section("Years");
    output::lines(&render::years(
        &years,
        context.dashboard.filter().year,
        |year| YearRangeService::is_current_year(clock, year),
    ));
    Ok(LoopControl::Continue)
}

fn cmd_catalog(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let kinds = match args {
        [] => vec![TransactionKind::Income, TransactionKind::Expense],
        [kind] => vec![kind
            .parse::<TransactionKind>()
            .map_err(CommandError::InvalidArguments)?],
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: catalog [income|expense]".into(),
            ))
        }
    };
    for kind in kinds {
        output::section(format!("{} categories", kind.label()));
        output::info(catalog_for(kind).join(", "));
    }
    Ok(LoopControl::Continue)
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let metadata = build_info::current();
    output::info(metadata.summary());
    output::info(format!("rustc: {}", metadata.rustc));
    Ok(LoopControl::Continue)
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first() {
        None => help::print_overview(&context.registry),
        Some(name) => match context.registry.get(&name.to_ascii_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => output::warning(format!("No help for `{name}`.")),
        },
    }
    Ok(LoopControl::Continue)
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
