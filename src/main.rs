use clap::{Parser, Subcommand};
use igdb::configs::{self, ConfigError};
use igdb::option::{self, FuncOption, Operator, Order, Subfilter};
use igdb::{Client, Endpoint};
use std::process::ExitCode;
use tracing::{error, warn};

#[derive(Debug, Parser)]
#[command(name = "igdb", version, about = "게임 데이터베이스 조회")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 엔드포인트의 필드 목록
    Fields {
        #[arg(value_parser = parse_endpoint)]
        endpoint: Endpoint,
    },

    /// 조건에 맞는 레코드 수
    Count {
        #[arg(value_parser = parse_endpoint)]
        endpoint: Endpoint,

        /// field:operator:value
        #[arg(long = "filter", value_parser = parse_filter)]
        filters: Vec<FilterArg>,
    },

    /// 조건에 맞는 레코드 목록
    Index {
        #[arg(value_parser = parse_endpoint)]
        endpoint: Endpoint,

        #[arg(long)]
        limit: Option<i32>,

        #[arg(long)]
        offset: Option<i32>,

        /// 콤마로 구분된 필드 목록
        #[arg(long)]
        fields: Option<String>,

        /// field:direction[:subfilter]
        #[arg(long, value_parser = parse_order)]
        order: Option<OrderArg>,

        /// field:operator:value
        #[arg(long = "filter", value_parser = parse_filter)]
        filters: Vec<FilterArg>,

        #[arg(long)]
        search: Option<String>,
    },
}

#[derive(Debug, Clone)]
struct FilterArg {
    field: String,
    op: Operator,
    value: String,
}

#[derive(Debug, Clone)]
struct OrderArg {
    field: String,
    order: Order,
    subfilter: Option<Subfilter>,
}

fn parse_endpoint(s: &str) -> Result<Endpoint, String> {
    Endpoint::try_from(s).map_err(|e| e.to_string())
}

fn parse_filter(s: &str) -> Result<FilterArg, String> {
    let mut parts = s.splitn(3, ':');
    let field = parts.next().unwrap_or_default();
    let op = parts.next().ok_or_else(|| format!("Invalid filter: {}", s))?;
    let value = parts.next().unwrap_or_default();

    Ok(FilterArg {
        field: field.to_owned(),
        op: Operator::try_from(op).map_err(|e| e.to_string())?,
        value: value.to_owned(),
    })
}

fn parse_order(s: &str) -> Result<OrderArg, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let (field, order, subfilter) = match parts.as_slice() {
        [field, order] => (field, order, None),
        [field, order, sub] => (field, order, Some(Subfilter::try_from(*sub).map_err(|e| e.to_string())?)),
        _ => return Err(format!("Invalid order: {}", s)),
    };

    Ok(OrderArg {
        field: field.to_string(),
        order: Order::try_from(*order).map_err(|e| e.to_string())?,
        subfilter,
    })
}

fn filter_options(filters: &[FilterArg]) -> Vec<FuncOption> {
    filters.iter()
        .map(|f| option::filter(&f.field, f.op, &f.value))
        .collect()
}

fn run(client: &Client, command: Command) -> Result<String, Box<dyn std::error::Error>> {
    let output = match command {
        Command::Fields { endpoint } => {
            let fields = client.get_endpoint_field_list(endpoint)?;
            serde_json::to_string_pretty(&fields)?
        }
        Command::Count { endpoint, filters } => {
            let count = client.get_endpoint_count(endpoint, filter_options(&filters))?;
            count.to_string()
        }
        Command::Index { endpoint, limit, offset, fields, order, filters, search } => {
            let mut opts = filter_options(&filters);
            if let Some(lim) = limit {
                opts.push(option::limit(lim));
            }
            if let Some(off) = offset {
                opts.push(option::offset(off));
            }
            if let Some(fields) = fields {
                let fields: Vec<&str> = fields.split(',').collect();
                opts.push(option::fields(&fields));
            }
            if let Some(o) = order {
                let subfilters: Vec<Subfilter> = o.subfilter.into_iter().collect();
                opts.push(option::order(&o.field, o.order, &subfilters));
            }

            let records: Vec<serde_json::Value> = match search {
                Some(query) => client.search_endpoint(endpoint, &query, opts)?,
                None => client.index_endpoint(endpoint, opts)?,
            };
            serde_json::to_string_pretty(&records)?
        }
    };

    Ok(output)
}

fn main() -> ExitCode {
    configs::load_dotenv();
    let cli = Cli::parse();

    let _guard = match configs::set_global_logging_config() {
        Ok(guard) => Some(guard),
        Err(e) => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_max_level(tracing::Level::WARN)
                .init();
            if e != ConfigError::LoggingDisabled {
                warn!("로깅 설정이 잘못 되어 표준 에러로 출력합니다. => {}", e);
            }
            None
        }
    };

    let config = match configs::Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("설정을 읽을 수 없습니다. => {}", e);
            return ExitCode::FAILURE;
        }
    };
    let client = match Client::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("클라이언트를 생성할 수 없습니다. => {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli.command) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn filter_argument() {
        let f = parse_filter("name:prefix:Mega Man: X").unwrap();
        assert_eq!(f.field, "name");
        assert_eq!(f.op, Operator::Prefix);
        assert_eq!(f.value, "Mega Man: X");

        assert!(parse_filter("rating").is_err());
        assert!(parse_filter("rating:like:5").is_err());
    }

    #[test]
    fn order_argument() {
        let o = parse_order("release_dates.date:desc:min").unwrap();
        assert_eq!(o.field, "release_dates.date");
        assert_eq!(o.order, Order::Descending);
        assert_eq!(o.subfilter, Some(Subfilter::Min));

        let o = parse_order("rating:asc").unwrap();
        assert_eq!(o.subfilter, None);

        assert!(parse_order("rating").is_err());
        assert!(parse_order("rating:up").is_err());
    }

    #[test]
    fn binary_name_matches_usage() {
        let command = Cli::command();
        assert_eq!(command.get_name(), "igdb");
        command.debug_assert();
    }

    #[test]
    fn cli_parses_index_command() {
        let cli = Cli::try_parse_from([
            "igdb", "index", "games", "--limit", "5", "--filter", "rating:gt:80", "--order", "rating:desc",
        ]).unwrap();

        match cli.command {
            Command::Index { endpoint, limit, filters, order, .. } => {
                assert_eq!(endpoint, Endpoint::Game);
                assert_eq!(limit, Some(5));
                assert_eq!(filters.len(), 1);
                assert_eq!(order.map(|o| o.field), Some("rating".to_owned()));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
