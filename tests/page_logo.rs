mod common;

use common::{assert_result, client, client_with, EMPTY, EMPTY_ARRAY};
use igdb::option::{fields, filter, limit, offset, FuncOption, Operator, OptionError};
use igdb::resource::PageLogo;
use igdb::ClientError;
use pretty_assertions::assert_eq;

const PAGE_LOGO_GET: &str = include_str!("data/pagelogo_get.json");
const PAGE_LOGO_LIST: &str = include_str!("data/pagelogo_list.json");

fn invalid_json() -> ClientError {
    ClientError::InvalidJson(String::new())
}

#[test]
fn get() {
    let init: Vec<PageLogo> = serde_json::from_str(PAGE_LOGO_GET).unwrap();

    let cases: Vec<(&str, &str, i64, Vec<FuncOption>, Result<PageLogo, ClientError>)> = vec![
        ("Valid response", PAGE_LOGO_GET, 112, vec![fields(&["name"])], Ok(init[0].clone())),
        ("Invalid ID", EMPTY, -1, vec![], Err(ClientError::NegativeId)),
        ("Empty response", EMPTY, 112, vec![], Err(invalid_json())),
        ("Invalid option", EMPTY, 112, vec![offset(-99999)], Err(ClientError::Option(OptionError::OutOfRange))),
        ("No results", EMPTY_ARRAY, 0, vec![], Err(ClientError::NoResults)),
    ];

    for (name, body, id, opts, expected) in cases {
        let result = client(body).page_logos().get(id, opts);
        assert_result(name, result, expected);
    }
}

#[test]
fn list() {
    let init: Vec<PageLogo> = serde_json::from_str(PAGE_LOGO_LIST).unwrap();
    let ids = [154, 227, 119, 106, 246];

    let cases: Vec<(&str, &str, Vec<i64>, Vec<FuncOption>, Result<Vec<PageLogo>, ClientError>)> = vec![
        ("Valid response", PAGE_LOGO_LIST, ids.to_vec(), vec![limit(5)], Ok(init.clone())),
        ("Zero IDs", EMPTY, vec![], vec![], Err(ClientError::EmptyIds)),
        ("Invalid ID", EMPTY, vec![-500], vec![], Err(ClientError::NegativeId)),
        ("Empty response", EMPTY, ids.to_vec(), vec![], Err(invalid_json())),
        ("Invalid option", EMPTY, ids.to_vec(), vec![offset(-99999)], Err(ClientError::Option(OptionError::OutOfRange))),
        ("No results", EMPTY_ARRAY, vec![0, 9999999], vec![], Err(ClientError::NoResults)),
    ];

    for (name, body, ids, opts, expected) in cases {
        let result = client(body).page_logos().list(&ids, opts);
        assert_result(name, result, expected);
    }
}

#[test]
fn index() {
    let init: Vec<PageLogo> = serde_json::from_str(PAGE_LOGO_LIST).unwrap();

    let cases: Vec<(&str, &str, Vec<FuncOption>, Result<Vec<PageLogo>, ClientError>)> = vec![
        ("Valid response", PAGE_LOGO_LIST, vec![limit(5)], Ok(init.clone())),
        ("Empty response", EMPTY, vec![], Err(invalid_json())),
        ("Invalid option", EMPTY, vec![offset(-99999)], Err(ClientError::Option(OptionError::OutOfRange))),
        ("No results", EMPTY_ARRAY, vec![], Err(ClientError::NoResults)),
    ];

    for (name, body, opts, expected) in cases {
        let result = client(body).page_logos().index(opts);
        assert_result(name, result, expected);
    }
}

#[test]
fn count() {
    let cases: Vec<(&str, &str, Vec<FuncOption>, Result<i64, ClientError>)> = vec![
        ("Happy path", r#"{"count": 100}"#, vec![filter("popularity", Operator::GreaterThan, "75")], Ok(100)),
        ("Empty response", EMPTY, vec![], Err(invalid_json())),
        ("Invalid option", EMPTY, vec![limit(-99999)], Err(ClientError::Option(OptionError::OutOfRange))),
        ("No results", EMPTY_ARRAY, vec![], Err(ClientError::NoResults)),
    ];

    for (name, body, opts, expected) in cases {
        let result = client(body).page_logos().count(opts);
        assert_result(name, result, expected);
    }
}

#[test]
fn fields_list() {
    let cases: Vec<(&str, &str, Result<Vec<String>, ClientError>)> = vec![
        ("Happy path", r#"["name", "slug", "url"]"#, Ok(vec!["name".to_owned(), "slug".to_owned(), "url".to_owned()])),
        ("Asterisk", r#"["*"]"#, Ok(vec!["*".to_owned()])),
        ("Empty response", EMPTY, Err(invalid_json())),
        ("No results", EMPTY_ARRAY, Ok(vec![])),
    ];

    for (name, body, expected) in cases {
        let result = client(body).page_logos().fields();
        assert_result(name, result, expected);
    }
}

#[test]
fn request_urls() {
    let (client, requests) = client_with(200, PAGE_LOGO_GET);
    let logos = client.page_logos();

    logos.get(112, vec![fields(&["name"])]).unwrap();
    logos.list(&[154, 227], vec![limit(5)]).unwrap();
    logos.index(vec![offset(0)]).unwrap();
    let _ = logos.fields();

    assert_eq!(*requests.borrow(), vec![
        "https://api.example.com/page_logos/112?fields=name".to_owned(),
        "https://api.example.com/page_logos/154,227?limit=5".to_owned(),
        "https://api.example.com/page_logos/?offset=0".to_owned(),
        "https://api.example.com/page_logos/meta".to_owned(),
    ]);
}

#[test]
fn invalid_arguments_are_not_sent() {
    let (client, requests) = client_with(200, PAGE_LOGO_LIST);
    let logos = client.page_logos();

    assert!(logos.get(-1, vec![]).is_err());
    assert!(logos.list(&[], vec![]).is_err());
    assert!(logos.list(&[1, -2], vec![]).is_err());
    assert!(logos.index(vec![limit(5), limit(10)]).is_err());
    assert!(logos.count(vec![fields(&[])]).is_err());

    assert!(requests.borrow().is_empty());
}
