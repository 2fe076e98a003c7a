//! XOG SOAP query client
//!
//! Queries are posted to `{server}/niku/xog` as a SOAP envelope carrying the
//! session id in the header and the query code plus `param_*` filters in the
//! body. Every `Record` element in the response becomes one [`Record`], its
//! child elements mapped local-name to text content.

use crate::error::QueryError;
use crate::filters::QueryFilters;
use crate::source::RecordSource;
use async_trait::async_trait;
use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;
use rashut_model::Record;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Path of the XOG endpoint relative to the server base
pub const XOG_PATH: &str = "/niku/xog";

const QUERY_NAMESPACE: &str = "http://www.niku.com/xog/Query";
const AUTH_NAMESPACE: &str = "http://www.niku.com/xog/Object";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for the XOG query service
#[derive(Debug, Clone)]
pub struct XogClient {
    http: reqwest::Client,
    server_base: String,
    session_id: String,
}

impl XogClient {
    /// Create a client for a server base such as `https://host:8043`
    ///
    /// # Errors
    /// Returns `QueryError::Http` if the HTTP client cannot be built.
    pub fn new(
        server_base: impl Into<String>,
        session_id: impl Into<String>,
    ) -> Result<Self, QueryError> {
        Self::with_timeout(server_base, session_id, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout
    ///
    /// # Errors
    /// Returns `QueryError::Http` if the HTTP client cannot be built.
    pub fn with_timeout(
        server_base: impl Into<String>,
        session_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, QueryError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            server_base: server_base.into(),
            session_id: session_id.into(),
        })
    }

    /// Full endpoint URL
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{XOG_PATH}", self.server_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl RecordSource for XogClient {
    async fn query(
        &self,
        query_code: &str,
        filters: &QueryFilters,
    ) -> Result<Vec<Record>, QueryError> {
        let body = envelope(&self.session_id, query_code, filters);
        tracing::debug!(endpoint = %self.endpoint(), query = query_code, "posting xog query");

        let response = self
            .http
            .post(self.endpoint())
            .header(CONTENT_TYPE, "text/xml")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), query = query_code, "xog query rejected");
            return Err(QueryError::Status {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let records = parse_records(&text)?;
        tracing::info!(query = query_code, records = records.len(), "xog query completed");
        Ok(records)
    }
}

/// Build the SOAP request body
///
/// The `Filter` element is only emitted when there are filters.
#[must_use]
pub fn envelope(session_id: &str, query_code: &str, filters: &QueryFilters) -> String {
    let filter = if filters.is_empty() {
        String::new()
    } else {
        let params: String = filters
            .iter()
            .map(|(key, value)| format!("<param_{key}>{}</param_{key}>", escape(value)))
            .collect();
        format!("<Filter>{params}</Filter>")
    };

    format!(
        concat!(
            r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" "#,
            r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
            r#"xmlns:xsd="http://www.w3.org/2001/XMLSchema">"#,
            r#"<soapenv:Header><xog:Auth xmlns:xog="{auth_ns}">"#,
            "<xog:SessionID>{session}</xog:SessionID></xog:Auth></soapenv:Header>",
            "<soapenv:Body>",
            r#"<Query xmlns="{ns}"><Code>{code}</Code>{filter}</Query>"#,
            "</soapenv:Body></soapenv:Envelope>",
        ),
        auth_ns = AUTH_NAMESPACE,
        session = escape(session_id),
        ns = QUERY_NAMESPACE,
        code = escape(query_code),
        filter = filter,
    )
}

/// Extract records from a query response
///
/// Each `Record` element yields one record. Direct children become fields;
/// deeper descendants contribute their text to the enclosing field.
///
/// # Errors
/// Returns `QueryError::Xml` on malformed XML and `QueryError::Fault` when
/// the response is a SOAP fault.
pub fn parse_records(xml: &str) -> Result<Vec<Record>, QueryError> {
    let mut reader = Reader::from_str(xml);
    let mut records = Vec::new();

    let mut current: Option<Record> = None;
    // Element depth below the open `Record`
    let mut depth = 0usize;
    let mut field: Option<String> = None;
    let mut text = String::new();
    let mut in_fault = false;
    let mut fault = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let local = e.local_name();
                if current.is_some() {
                    depth += 1;
                    if depth == 1 {
                        field = Some(String::from_utf8_lossy(local.as_ref()).into_owned());
                        text.clear();
                    }
                } else if local.as_ref() == b"Record" {
                    current = Some(Record::new());
                    depth = 0;
                } else if local.as_ref() == b"faultstring" {
                    in_fault = true;
                }
            }
            Event::Empty(e) => {
                let local = e.local_name();
                match current.as_mut() {
                    Some(record) if depth == 0 => {
                        record.insert(String::from_utf8_lossy(local.as_ref()).into_owned(), "");
                    }
                    Some(_) => {}
                    None if local.as_ref() == b"Record" => records.push(Record::new()),
                    None => {}
                }
            }
            Event::Text(e) => {
                if field.is_some() {
                    text.push_str(&e.unescape()?);
                } else if in_fault {
                    fault.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if field.is_some() {
                    text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(_) => {
                if current.is_some() {
                    if depth == 0 {
                        records.extend(current.take());
                    } else {
                        if depth == 1 {
                            if let (Some(name), Some(record)) = (field.take(), current.as_mut()) {
                                record.insert(name, std::mem::take(&mut text));
                            }
                        }
                        depth -= 1;
                    }
                } else if in_fault {
                    in_fault = false;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if records.is_empty() && !fault.trim().is_empty() {
        return Err(QueryError::Fault(fault.trim().to_string()));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rashut_model::{fields, Year};

    #[test]
    fn envelope_carries_session_code_and_filters() {
        let filters = QueryFilters::for_year(Year(2025)).with("OBS", "a&b");
        let body = envelope("sess-1", "dash_rashut_pm", &filters);

        assert!(body.contains(
            r#"<xog:Auth xmlns:xog="http://www.niku.com/xog/Object"><xog:SessionID>sess-1</xog:SessionID></xog:Auth>"#
        ));
        assert!(body.contains(r#"<Query xmlns="http://www.niku.com/xog/Query">"#));
        assert!(body.contains("<Code>dash_rashut_pm</Code>"));
        assert!(body.contains("<Filter><param_year>2025</param_year><param_obs>a&amp;b</param_obs></Filter>"));
    }

    #[test]
    fn envelope_without_filters_omits_filter_element() {
        let body = envelope("s", "q", &QueryFilters::new());
        assert!(!body.contains("Filter"));
        assert!(body.contains("<Code>q</Code></Query>"));
    }

    #[test]
    fn parses_records_by_local_name() {
        let xml = r#"<?xml version="1.0"?>
            <soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
              <soapenv:Body>
                <QueryResult xmlns="http://www.niku.com/xog/Query">
                  <Code>dash_rashut_pm</Code>
                  <Records>
                    <Record>
                      <common_shaam>1</common_shaam>
                      <apro_start_year>2025</apro_start_year>
                      <percent_complete>0.5</percent_complete>
                      <canceled_year/>
                    </Record>
                    <Record>
                      <q:status xmlns:q="urn:x">8</q:status>
                      <name>R&amp;D</name>
                    </Record>
                  </Records>
                </QueryResult>
              </soapenv:Body>
            </soapenv:Envelope>"#;

        let records = parse_records(xml).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].get(fields::COMMON_SHAAM), Some("1"));
        assert_eq!(records[0].get(fields::START_YEAR), Some("2025"));
        assert_eq!(records[0].number(fields::PERCENT_COMPLETE), Some(0.5));
        assert_eq!(records[0].get(fields::CANCELED_YEAR), Some(""));
        assert!(!records[0].has(fields::CANCELED_YEAR));

        assert_eq!(records[1].get(fields::STATUS), Some("8"));
        assert_eq!(records[1].get("name"), Some("R&D"));
    }

    #[test]
    fn response_without_records_is_empty() {
        let xml = "<QueryResult><Records></Records></QueryResult>";
        assert!(parse_records(xml).unwrap().is_empty());
    }

    #[test]
    fn soap_fault_is_reported() {
        let xml = r#"<Envelope><Body><Fault>
            <faultcode>Client</faultcode>
            <faultstring>Invalid session</faultstring>
            </Fault></Body></Envelope>"#;

        let err = parse_records(xml).unwrap_err();
        assert!(matches!(err, QueryError::Fault(ref msg) if msg == "Invalid session"));
    }

    #[test]
    fn malformed_xml_is_an_error() {
        let err = parse_records("<Records><Record><a>1</b></Record>").unwrap_err();
        assert!(matches!(err, QueryError::Xml(_)));
    }

    #[test]
    fn endpoint_joins_server_base() {
        let client = XogClient::new("https://pm.example:8043/", "s").unwrap();
        assert_eq!(client.endpoint(), "https://pm.example:8043/niku/xog");
    }
}
