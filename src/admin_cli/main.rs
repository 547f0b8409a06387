use biztime::database::{self, DB};
use clap::{Parser, Subcommand};
use sea_orm::{ConnectionTrait, JsonValue, Statement};
use serde_json::{Map, Value as JsonValueSerde};
use std::{fs, path::Path};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, verbatim_doc_comment)]
/// Admin utility for the BizTime database.
/// Creates the schema, loads sample data and runs ad-hoc queries.
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Database maintenance commands.
    Db {
        #[command(subcommand)]
        db_command: DbCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DbCommand {
    /// Drops and recreates every BizTime table from <dir>/schema.sql.
    Init {
        /// Directory holding the SQL scripts.
        #[arg(short, long, default_value = "dump")]
        dir: String,
    },
    /// Loads sample companies, invoices and industries from <dir>/data.sql.
    Seed {
        /// Directory holding the SQL scripts.
        #[arg(short, long, default_value = "dump")]
        dir: String,
    },
    /// Drops ALL tables in the public schema. Use with care!
    Wipe,
    /// Runs a SELECT against a table and prints the rows as JSON.
    Query {
        /// Table to query.
        #[arg(short, long)]
        table: String,

        /// WHERE clause (e.g. "paid = false" or "comp_code = 'apple'").
        #[arg(short, long)]
        filter: Option<String>,
    },
}

async fn execute_sql_file(db: &DB, file_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("Running script: {}", file_path.display());
    let sql = fs::read_to_string(file_path)?;
    for query in sql.split(';').filter(|s| !s.trim().is_empty()) {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            query.trim().to_string(),
        ))
        .await?;
    }
    println!("Script finished.");
    Ok(())
}

async fn wipe(db: &DB) -> Result<(), Box<dyn std::error::Error>> {
    let tables: Vec<String> = db
        .query_all(Statement::from_string(
            db.get_database_backend(),
            "SELECT tablename FROM pg_tables WHERE schemaname = 'public'",
        ))
        .await?
        .into_iter()
        .filter_map(|row| row.try_get::<String>("", "tablename").ok())
        .collect();

    if tables.is_empty() {
        println!("No tables found. Database is already empty.");
        return Ok(());
    }

    for table in tables {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            format!("DROP TABLE IF EXISTS \"{}\" CASCADE", table),
        ))
        .await?;
        println!("Dropped table: {}", table);
    }
    println!("Database wiped.");
    Ok(())
}

async fn query(
    db: &DB,
    table: &str,
    filter: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut query_str = format!("SELECT * FROM \"{}\"", table);
    if let Some(f) = filter {
        query_str.push_str(" WHERE ");
        query_str.push_str(f);
    }

    println!("Running query: {}", query_str);
    let results = db
        .query_all(Statement::from_string(db.get_database_backend(), query_str))
        .await?;

    let mut json_results: Vec<JsonValueSerde> = Vec::with_capacity(results.len());
    for row in results {
        let mut map = Map::new();
        for col in row.column_names() {
            let value: JsonValue = row.try_get("", col.as_str()).unwrap_or(JsonValue::Null);
            map.insert(col.to_string(), value);
        }
        json_results.push(JsonValueSerde::Object(map));
    }

    println!("{}", serde_json::to_string_pretty(&json_results)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));
    let cli = Cli::parse();
    let db = database::connect().await?;

    match &cli.command {
        Commands::Db { db_command } => match db_command {
            DbCommand::Init { dir } => {
                execute_sql_file(&db, &Path::new(dir).join("schema.sql")).await?;
            }
            DbCommand::Seed { dir } => {
                execute_sql_file(&db, &Path::new(dir).join("data.sql")).await?;
            }
            DbCommand::Wipe => wipe(&db).await?,
            DbCommand::Query { table, filter } => query(&db, table, filter.as_deref()).await?,
        },
    }

    Ok(())
}
