use anyhow::{Result, anyhow};
use bigdecimal::BigDecimal;
use clap::{Parser, Subcommand, ValueEnum};

use savy_back_end::action_router::{ActionRouterInput, ActionRouterOutput};
use savy_back_end::budgets::processor_enums::{
    BudgetsProcessorInput, BudgetsProcessorOutput, CreateBudgetInputArgs,
};
use savy_back_end::cli_helper::{call_action_router, initialize_app_config};
use savy_back_end::cli_utils::formatting::{
    format_decimal, print_budgets, print_header, print_operations,
};
use savy_back_end::cli_utils::{format_json, format_record, print_error, print_info, print_success};
use savy_back_end::operations::db_types::OperationStatus;
use savy_back_end::operations::processor_enums::{
    CreateOperationInputArgs, OperationsProcessorInput, OperationsProcessorOutput,
    UpdateOperationStatusInputArgs,
};
use savy_back_end::utils::app_config::AppConfig;

#[derive(Parser, Debug)]
#[command(
    name = "savy-cli",
    about = "Manage Savy budgets and monthly operations",
    long_about = "Runs budget and operation actions directly against the Savy database. \
                  `savy-cli transfer` is meant to be scheduled on the first day of each month."
)]
struct CliArgs {
    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage budget templates
    #[command(subcommand)]
    Budgets(BudgetsCommand),
    /// Manage this month's operations
    #[command(subcommand)]
    Operations(OperationsCommand),
    /// Copy every budget into this month as pending operations
    Transfer,
    /// Show the current month summary
    Summary,
}

#[derive(Subcommand, Debug)]
enum BudgetsCommand {
    /// List budgets, credits first
    List,
    /// Add a budget
    Add {
        #[arg(long)]
        label: String,
        /// Signed amount, negative for expenses
        #[arg(long, allow_hyphen_values = true)]
        amount: BigDecimal,
    },
    /// Remove a budget
    Remove {
        #[arg(long)]
        id: i32,
    },
}

#[derive(Subcommand, Debug)]
enum OperationsCommand {
    /// List this month's operations, credits first
    List,
    /// Add an operation to this month
    Add {
        #[arg(long)]
        label: String,
        /// Signed amount, negative for expenses
        #[arg(long, allow_hyphen_values = true)]
        amount: BigDecimal,
        #[arg(long, value_enum, default_value = "pending")]
        status: StatusArg,
    },
    /// Change the status of an operation
    Status {
        #[arg(long)]
        id: i32,
        #[arg(long, value_enum)]
        status: StatusArg,
    },
    /// Remove an operation
    Remove {
        #[arg(long)]
        id: i32,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StatusArg {
    #[value(name = "pending")]
    Pending,
    #[value(name = "checked")]
    Checked,
}

impl From<StatusArg> for OperationStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Pending => OperationStatus::Pending,
            StatusArg::Checked => OperationStatus::Checked,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    let app_config = match initialize_app_config() {
        Ok(config) => config,
        Err(e) => {
            print_error(&format!("Failed to initialize: {}", e));
            return Err(e);
        }
    };

    if let Err(e) = run(args, app_config).await {
        print_error(&format!("{:#}", e));
        return Err(e);
    }

    Ok(())
}

enum Listing {
    Budgets,
    Operations,
}

async fn run(args: CliArgs, app_config: AppConfig) -> Result<()> {
    let json = args.json;

    // every command ends by showing the list it touched, like the HTTP API
    let listing = match args.command {
        Command::Budgets(BudgetsCommand::List) => Listing::Budgets,
        Command::Budgets(BudgetsCommand::Add { label, amount }) => {
            let input = ActionRouterInput::Budgets(BudgetsProcessorInput::Create(
                CreateBudgetInputArgs { label, amount },
            ));
            if let ActionRouterOutput::Budgets(BudgetsProcessorOutput::Create(id)) =
                call_action_router(input, app_config.clone()).await?
            {
                print_success(&format!("Budget {} created", id));
            }
            Listing::Budgets
        }
        Command::Budgets(BudgetsCommand::Remove { id }) => {
            let input = ActionRouterInput::Budgets(BudgetsProcessorInput::Delete(id));
            call_action_router(input, app_config.clone()).await?;
            print_success(&format!("Budget {} removed", id));
            Listing::Budgets
        }
        Command::Operations(OperationsCommand::List) => Listing::Operations,
        Command::Operations(OperationsCommand::Add { label, amount, status }) => {
            let input = ActionRouterInput::Operations(OperationsProcessorInput::Create(
                CreateOperationInputArgs {
                    label,
                    amount,
                    status: Some(status.into()),
                },
            ));
            if let ActionRouterOutput::Operations(OperationsProcessorOutput::Create(id)) =
                call_action_router(input, app_config.clone()).await?
            {
                print_success(&format!("Operation {} created", id));
            }
            Listing::Operations
        }
        Command::Operations(OperationsCommand::Status { id, status }) => {
            let input = ActionRouterInput::Operations(OperationsProcessorInput::UpdateStatus(
                UpdateOperationStatusInputArgs {
                    operation_id: id,
                    status: status.into(),
                },
            ));
            call_action_router(input, app_config.clone()).await?;
            print_success(&format!("Operation {} updated", id));
            Listing::Operations
        }
        Command::Operations(OperationsCommand::Remove { id }) => {
            let input = ActionRouterInput::Operations(OperationsProcessorInput::Delete(id));
            call_action_router(input, app_config.clone()).await?;
            print_success(&format!("Operation {} removed", id));
            Listing::Operations
        }
        Command::Transfer => {
            let input = ActionRouterInput::Budgets(BudgetsProcessorInput::Transfer);
            if let ActionRouterOutput::Budgets(BudgetsProcessorOutput::Transfer(count)) =
                call_action_router(input, app_config.clone()).await?
            {
                print_success(&format!(
                    "{} budgets transferred into {}",
                    count,
                    app_config.current_month().format("%B %Y")
                ));
            }
            Listing::Operations
        }
        Command::Summary => return show_summary(app_config, json).await,
    };

    match listing {
        Listing::Budgets => show_budgets(app_config, json).await,
        Listing::Operations => show_operations(app_config, json).await,
    }
}

async fn show_budgets(app_config: AppConfig, json: bool) -> Result<()> {
    let input = ActionRouterInput::Budgets(BudgetsProcessorInput::List);
    let budgets = match call_action_router(input, app_config).await? {
        ActionRouterOutput::Budgets(BudgetsProcessorOutput::List(budgets)) => budgets,
        _ => return Err(anyhow!("Unexpected response type")),
    };

    if json {
        println!("{}", format_json(&budgets));
    } else if budgets.is_empty() {
        print_info("No budgets yet");
    } else {
        print_header("Budgets");
        print_budgets(&budgets);
    }

    Ok(())
}

async fn show_operations(app_config: AppConfig, json: bool) -> Result<()> {
    let month = app_config.current_month();
    let input = ActionRouterInput::Operations(OperationsProcessorInput::ListCurrentMonth);
    let operations = match call_action_router(input, app_config).await? {
        ActionRouterOutput::Operations(OperationsProcessorOutput::ListCurrentMonth(operations)) => operations,
        _ => return Err(anyhow!("Unexpected response type")),
    };

    if json {
        println!("{}", format_json(&operations));
    } else if operations.is_empty() {
        print_info(&format!("No operations for {}", month.format("%B %Y")));
    } else {
        print_header(&format!("Operations for {}", month.format("%B %Y")));
        print_operations(&operations);
    }

    Ok(())
}

async fn show_summary(app_config: AppConfig, json: bool) -> Result<()> {
    let month = app_config.current_month();
    let input = ActionRouterInput::Operations(OperationsProcessorInput::Summary);
    let summary = match call_action_router(input, app_config).await? {
        ActionRouterOutput::Operations(OperationsProcessorOutput::Summary(summary)) => summary,
        _ => return Err(anyhow!("Unexpected response type")),
    };

    if json {
        println!("{}", format_json(&summary));
        return Ok(());
    }

    print_header(&format!("Summary for {}", month.format("%B %Y")));
    format_record(vec![
        ("Credit (current)", format_decimal(&summary.credit.current)),
        ("Credit (forecast)", format_decimal(&summary.credit.forecast)),
        ("Debit (current)", format_decimal(&summary.debit.current)),
        ("Debit (forecast)", format_decimal(&summary.debit.forecast)),
        ("Balance (current)", format_decimal(&summary.balance.current)),
        ("Balance (forecast)", format_decimal(&summary.balance.forecast)),
        ("Month elapsed", format!("{}%", summary.completion)),
    ]);

    Ok(())
}
