//! DNS-over-HTTPS JSON response parsing.
//!
//! The JSON API (`application/dns-json`) returns an object whose `Answer`
//! member lists the resource records of the answer section in order:
//!
//! ```json
//! {"Status":0,"Answer":[{"name":"example.com","type":1,"TTL":300,"data":"93.184.216.34"}]}
//! ```

use log::debug;
use serde::Deserialize;

use crate::config::IP_LIST_SEPARATOR;
use crate::error_handling::ResolutionError;
use crate::ip_literal::is_ip_literal;

/// The subset of a DoH JSON response the resolver reads.
#[derive(Debug, Deserialize)]
pub struct DohResponse {
    /// DNS response code (0 = NOERROR, 3 = NXDOMAIN)
    #[serde(rename = "Status", default)]
    pub status: Option<u16>,
    /// Answer section records, absent when there is no answer
    #[serde(rename = "Answer", default)]
    pub answer: Option<Vec<DohAnswer>>,
}

/// One answer record.
#[derive(Debug, Deserialize)]
pub struct DohAnswer {
    /// Record data. A string for every record type the API returns, but kept
    /// loose so one odd record cannot reject the whole response.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl DohAnswer {
    /// The record data if it is an IPv4 literal (i.e. A-record data).
    fn ipv4(&self) -> Option<&str> {
        match &self.data {
            Some(serde_json::Value::String(data)) if is_ip_literal(data) => Some(data),
            _ => None,
        }
    }
}

/// Extracts the IPv4 addresses from a DoH JSON response body.
///
/// Addresses are kept in response order and joined with `", "`. Records whose
/// data is not an IPv4 literal (CNAME targets, malformed entries) are dropped.
///
/// # Errors
///
/// Returns a `NoResults` [`ResolutionError`] if the body is not the expected
/// JSON shape, if `Answer` is absent or empty, or if no record carries an IPv4
/// address (e.g. a CNAME-only answer).
pub fn parse_answer(body: &str) -> Result<String, ResolutionError> {
    let response: DohResponse = serde_json::from_str(body).map_err(|e| {
        debug!("Unparseable DoH response: {e}");
        ResolutionError::no_results()
    })?;

    let answers = match response.answer {
        Some(answers) if !answers.is_empty() => answers,
        _ => {
            debug!("DoH response has no answer (status {:?})", response.status);
            return Err(ResolutionError::no_results());
        }
    };

    let ips: Vec<&str> = answers.iter().filter_map(DohAnswer::ipv4).collect();
    if ips.is_empty() {
        debug!(
            "DoH answer has {} record(s) but no IPv4 address",
            answers.len()
        );
        return Err(ResolutionError::no_results());
    }

    Ok(ips.join(IP_LIST_SEPARATOR))
}
