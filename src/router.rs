use std::collections::HashMap;
use std::io::Read;

use astra::Request;
use url::form_urlencoded;

use crate::api::models::NewProperty;
use crate::api::PropertyService;
use crate::domain::comparison;
use crate::domain::selection::{SelectionSet, Slot};
use crate::errors::ServerError;
use crate::responses::{html_response, redirect_response, ResultResp};
use crate::templates::links;
use crate::templates::pages::{browse_page, compare_page, home_page, manage_page, BrowseVm, ManageVm};

pub fn handle(req: Request, api: &dyn PropertyService) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(home_page()),
        ("GET", "/browse") => browse(&req, api),
        ("GET", "/manage") => manage(&req, api),
        ("GET", "/compare") => compare(&req, api),
        ("GET", "/select/toggle") => select_toggle(&req),
        ("GET", "/select/assign") => select_assign(&req),
        ("GET", "/select/clear") => select_clear(&req),
        ("POST", "/properties") => add_property(req, api),
        _ => Err(ServerError::NotFound),
    }
}

fn browse(req: &Request, api: &dyn PropertyService) -> ResultResp {
    let params = parse_query(req);
    let selection = selection_from(&params);
    let query = params.get("q").cloned().unwrap_or_default();

    let list = if query.trim().is_empty() {
        api.list_properties()?
    } else {
        api.search_properties(query.trim())?
    };

    html_response(browse_page(&BrowseVm {
        properties: list.properties,
        selection,
        query,
        source: list.source,
        notice: params.get("msg").cloned(),
    }))
}

fn manage(req: &Request, api: &dyn PropertyService) -> ResultResp {
    let params = parse_query(req);
    let selection = selection_from(&params);

    let list = api.list_properties()?;
    // Stats are decoration here; a failed stats call must not take the
    // whole management page down with it.
    let stats = api.property_stats().ok();

    html_response(manage_page(&ManageVm {
        properties: list.properties,
        selection,
        stats,
        source: list.source,
        notice: params.get("msg").cloned(),
    }))
}

fn compare(req: &Request, api: &dyn PropertyService) -> ResultResp {
    let params = parse_query(req);

    // Addresses are read raw here rather than through a SelectionSet:
    // a duplicated pair must fail loudly, not collapse into one slot.
    let address1 = required(&params, "p1").map_err(|_| incomplete_pair())?;
    let address2 = required(&params, "p2").map_err(|_| incomplete_pair())?;
    if address1 == address2 {
        return Err(ServerError::InvalidComparison(address1));
    }

    let remote = api.compare_properties(&address1, &address2)?;

    // The remote payload echoes both records (and its own summary numbers);
    // the local engine is the single source of truth for everything shown.
    let result = comparison::compare(&remote.property1, &remote.property2)?;

    let chart = remote
        .chart_available
        .then_some(remote.chart.as_deref())
        .flatten();

    html_response(compare_page(&result, chart))
}

fn incomplete_pair() -> ServerError {
    ServerError::BadRequest("Select two properties before comparing".to_string())
}

fn select_toggle(req: &Request) -> ResultResp {
    let params = parse_query(req);
    let mut selection = selection_from(&params);
    let address = required(&params, "addr")?;

    match selection.toggle(&address) {
        Ok(()) => back_to(&params, &selection, None),
        // Recoverable: keep the old selection, surface a message.
        Err(full) => back_to(&params, &selection, Some(&ServerError::from(full).to_string())),
    }
}

fn select_assign(req: &Request) -> ResultResp {
    let params = parse_query(req);
    let mut selection = selection_from(&params);
    let address = required(&params, "addr")?;

    let slot = params
        .get("slot")
        .and_then(|s| s.parse::<u8>().ok())
        .and_then(Slot::from_number)
        .ok_or_else(|| ServerError::BadRequest("slot must be 1 or 2".to_string()))?;

    selection.assign(slot, &address);
    back_to(&params, &selection, None)
}

fn select_clear(req: &Request) -> ResultResp {
    let params = parse_query(req);
    back_to(&params, &SelectionSet::new(), None)
}

fn add_property(mut req: Request, api: &dyn PropertyService) -> ResultResp {
    let form = parse_form(&mut req)?;
    let property = NewProperty::from_form(&form);

    if property.address.is_empty() {
        return Err(ServerError::BadRequest("Address is required".to_string()));
    }

    let receipt = api.add_property(&property)?;
    println!("🏠 Added property: {}", receipt.address);

    let location = links::redirect(
        "/manage",
        &SelectionSet::new(),
        "",
        Some(&format!("Property added: {}", receipt.address)),
    );
    redirect_response(&location)
}

/// Redirect back to the page named in `back` (browse by default), carrying
/// the selection, the search query, and an optional user-visible message.
fn back_to(
    params: &HashMap<String, String>,
    selection: &SelectionSet,
    msg: Option<&str>,
) -> ResultResp {
    let path = match params.get("back").map(String::as_str) {
        Some("manage") => "/manage",
        _ => "/browse",
    };
    let query = params.get("q").map(String::as_str).unwrap_or("");
    redirect_response(&links::redirect(path, selection, query, msg))
}

fn selection_from(params: &HashMap<String, String>) -> SelectionSet {
    SelectionSet::from_slots(
        params.get("p1").map(String::as_str),
        params.get("p2").map(String::as_str),
    )
}

fn required(params: &HashMap<String, String>, key: &str) -> Result<String, ServerError> {
    params
        .get(key)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ServerError::BadRequest(format!("missing parameter: {key}")))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    let raw = req.uri().query().unwrap_or("");
    form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|_| ServerError::BadRequest("unreadable request body".to_string()))?;

    Ok(form_urlencoded::parse(&body).into_owned().collect())
}
