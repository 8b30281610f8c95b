//! Query flags shared by `build` and `search`

use clap::Args;
use indexmap::IndexMap;
use quarry::aggregations::{Aggregations, TermsAggregation, DEFAULT_BUCKET_SIZE};
use quarry::command::OrderSpec;
use quarry::query_properties::{QueryPropertyNode, SourceFilter};
use quarry::{MinimumShouldMatch, SearchSource, SearchableModel};
use quarry_client::SearchConfig;
use serde_json::Value;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Index (or comma-separated indices) to search
    #[arg(short, long)]
    pub index: String,

    /// Free-text query
    #[arg(short, long)]
    pub query: Option<String>,

    /// Field matched by the free-text query, repeatable (`title^2` boosts)
    #[arg(short, long = "field")]
    pub fields: Vec<String>,

    /// Exact-match filter `field=value`, repeatable
    #[arg(long = "where", value_name = "FIELD=VALUE", value_parser = parse_where)]
    pub wheres: Vec<(String, Value)>,

    /// Set-membership filter `field=v1,v2`, repeatable
    #[arg(long = "where-in", value_name = "FIELD=V1,V2", value_parser = parse_where_in)]
    pub where_ins: Vec<(String, Vec<Value>)>,

    /// Sort `field[:asc|desc]`, repeatable; order of flags is sort priority
    #[arg(short, long = "sort", value_name = "FIELD[:DIR]", value_parser = parse_sort)]
    pub sort: Vec<OrderSpec>,

    #[arg(short, long)]
    pub limit: Option<usize>,

    #[arg(long)]
    pub offset: Option<usize>,

    /// Stored fields to return (`fields` key)
    #[arg(long, value_delimiter = ',')]
    pub select: Vec<String>,

    /// `_source` include pattern, repeatable
    #[arg(long)]
    pub include: Vec<String>,

    /// `_source` exclude pattern, repeatable
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Terms aggregation `name=field[:size]`, repeatable
    #[arg(long = "terms-agg", value_name = "NAME=FIELD[:SIZE]", value_parser = parse_terms_agg)]
    pub terms_aggs: Vec<TermsAggArg>,

    /// Should clauses that must match: a count or an expression such as `75%`
    #[arg(long)]
    pub minimum_should_match: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermsAggArg {
    pub name: String,
    pub field: String,
    pub size: usize,
}

fn split_pair<'a>(raw: &'a str, expected: &str) -> Result<(&'a str, &'a str), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(format!("expected {}, got '{}'", expected, raw)),
    }
}

/// JSON scalars (`42`, `true`, `"quoted"`) keep their type; anything else is a string
fn parse_scalar(raw: &str) -> Value {
    let raw = raw.trim();
    match serde_json::from_str::<Value>(raw) {
        Ok(value) if !value.is_object() && !value.is_array() => value,
        _ => Value::String(raw.to_string()),
    }
}

fn parse_where(raw: &str) -> Result<(String, Value), String> {
    let (field, value) = split_pair(raw, "FIELD=VALUE")?;
    Ok((field.to_string(), parse_scalar(value)))
}

fn parse_where_in(raw: &str) -> Result<(String, Vec<Value>), String> {
    let (field, values) = split_pair(raw, "FIELD=V1,V2")?;
    let values = values
        .split(',')
        .filter(|v| !v.trim().is_empty())
        .map(parse_scalar)
        .collect::<Vec<_>>();
    if values.is_empty() {
        return Err(format!("no values given for '{}'", field));
    }
    Ok((field.to_string(), values))
}

/// Direction is passed through unchecked; `SearchCommand::wrap` validates it
fn parse_sort(raw: &str) -> Result<OrderSpec, String> {
    let (field, direction) = raw.split_once(':').unwrap_or((raw, "asc"));
    if field.is_empty() {
        return Err(format!("expected FIELD[:DIR], got '{}'", raw));
    }
    Ok(OrderSpec::new(field, direction))
}

fn parse_terms_agg(raw: &str) -> Result<TermsAggArg, String> {
    let (name, target) = split_pair(raw, "NAME=FIELD[:SIZE]")?;
    let (field, size) = match target.split_once(':') {
        Some((field, size)) => (
            field,
            size.parse::<usize>()
                .map_err(|e| format!("invalid bucket size '{}': {}", size, e))?,
        ),
        None => (target, DEFAULT_BUCKET_SIZE),
    };
    if field.is_empty() {
        return Err(format!("expected NAME=FIELD[:SIZE], got '{}'", raw));
    }
    Ok(TermsAggArg {
        name: name.to_string(),
        field: field.to_string(),
        size,
    })
}

/// The index named on the command line, searched over the configured fields
#[derive(Debug)]
struct CliModel {
    index: String,
    fields: Vec<String>,
}

impl SearchableModel for CliModel {
    fn searchable_as(&self) -> String {
        self.index.clone()
    }

    fn searchable_fields(&self) -> Option<Vec<String>> {
        (!self.fields.is_empty()).then(|| self.fields.clone())
    }
}

/// Command-line flags merged with config defaults, fed to `SearchCommand::wrap`
#[derive(Debug)]
pub struct QuerySource<'a> {
    args: &'a QueryArgs,
    model: CliModel,
    default_limit: Option<usize>,
}

impl<'a> QuerySource<'a> {
    pub fn new(args: &'a QueryArgs, defaults: &SearchConfig) -> Self {
        let fields = if args.fields.is_empty() {
            defaults.default_fields.clone()
        } else {
            args.fields.clone()
        };

        Self {
            args,
            model: CliModel {
                index: args.index.clone(),
                fields,
            },
            default_limit: defaults.default_limit,
        }
    }
}

impl SearchSource for QuerySource<'_> {
    fn model(&self) -> Option<&dyn SearchableModel> {
        Some(&self.model)
    }

    fn offset(&self) -> Option<usize> {
        self.args.offset
    }

    fn limit(&self) -> Option<usize> {
        self.args.limit.or(self.default_limit)
    }

    fn orders(&self) -> Vec<OrderSpec> {
        self.args.sort.clone()
    }

    fn fields(&self) -> Vec<String> {
        self.args.select.clone()
    }

    fn aggregations(&self) -> Aggregations {
        let mut aggregations = Aggregations::new();
        for agg in &self.args.terms_aggs {
            aggregations.insert(
                agg.name.clone(),
                Arc::new(TermsAggregation::new(agg.field.clone()).size(agg.size)),
            );
        }
        aggregations
    }

    fn minimum_should_match(&self) -> Option<MinimumShouldMatch> {
        self.args
            .minimum_should_match
            .as_deref()
            .map(|raw| match raw.parse::<MinimumShouldMatch>() {
                Ok(value) => value,
                Err(never) => match never {},
            })
    }

    fn query_properties(&self) -> Vec<QueryPropertyNode> {
        let filter = self
            .args
            .include
            .iter()
            .fold(SourceFilter::empty(), |filter, p| filter.include(p.clone()));
        let filter = self
            .args
            .exclude
            .iter()
            .fold(filter, |filter, p| filter.exclude(p.clone()));

        if filter.is_empty() {
            Vec::new()
        } else {
            vec![Arc::new(filter)]
        }
    }

    fn query(&self) -> Option<String> {
        self.args.query.clone()
    }

    fn wheres(&self) -> IndexMap<String, Value> {
        self.args.wheres.iter().cloned().collect()
    }

    fn where_ins(&self) -> IndexMap<String, Vec<Value>> {
        self.args.where_ins.iter().cloned().collect()
    }
}
