mod common;

use common::{client, client_with, EMPTY_ARRAY};
use igdb::option::{compose, fields, filter, limit, order, Operator, Order, OptionError, Subfilter};
use igdb::resource::Game;
use igdb::{ClientError, Endpoint};
use pretty_assertions::assert_eq;

#[test]
fn field_list_for_every_endpoint() {
    for end in Endpoint::ALL {
        let (client, requests) = client_with(200, r#"["id", "name"]"#);
        let fields = client.get_endpoint_field_list(end).unwrap();

        assert_eq!(fields, vec!["id".to_owned(), "name".to_owned()]);
        assert_eq!(*requests.borrow(), vec![format!("https://api.example.com/{}meta", end.path())]);
    }
}

#[test]
fn field_list_tolerates_no_results() {
    let fields = client(EMPTY_ARRAY).get_endpoint_field_list(Endpoint::Credit).unwrap();
    assert!(fields.is_empty());
}

#[test]
fn field_list_propagates_server_error() {
    let (client, _) = client_with(500, "Internal Server Error");
    let result = client.get_endpoint_field_list(Endpoint::Feed);

    assert_eq!(result, Err(ClientError::ServerError {
        status: 500,
        message: "Internal Server Error".to_owned(),
    }));
}

#[test]
fn count_with_filters() {
    let (client, requests) = client_with(200, r#"{"count": 8023}"#);
    let count = client.get_endpoint_count(Endpoint::Game, vec![
        filter("rating", Operator::GreaterThanEqual, "80"),
        filter("genres", Operator::In, "12,31"),
    ]).unwrap();

    assert_eq!(count, 8023);
    assert_eq!(*requests.borrow(), vec![
        "https://api.example.com/games/count?%5Bgenres%5D%5Bin%5D=12%2C31&%5Brating%5D%5Bgte%5D=80".to_owned(),
    ]);
}

#[test]
fn count_rejects_duplicate_option() {
    let (client, requests) = client_with(200, r#"{"count": 1}"#);
    let result = client.get_endpoint_count(Endpoint::Game, vec![limit(5), limit(6)]);

    assert_eq!(result, Err(ClientError::Option(OptionError::AlreadySet("limit"))));
    assert!(requests.borrow().is_empty());
}

#[test]
fn search_games_with_composed_options() {
    let body = r#"[
        {"id": 1025, "name": "Zelda II: The Adventure of Link", "rating": 68.5},
        {"id": 1022, "name": "The Legend of Zelda", "rating": 81.2}
    ]"#;
    let (client, requests) = client_with(200, body);

    let top_rated = compose(vec![
        fields(&["name", "rating"]),
        order("rating", Order::Descending, &[Subfilter::Max]),
        limit(2),
    ]);
    let games: Vec<Game> = client.games().search("zelda", vec![top_rated]).unwrap();

    assert_eq!(games.len(), 2);
    assert_eq!(games[1].name, "The Legend of Zelda");
    assert_eq!(games[1].rating, Some(81.2));
    assert_eq!(*requests.borrow(), vec![
        "https://api.example.com/games/?fields=name%2Crating&limit=2&order=rating%3Adesc%3Amax&search=zelda".to_owned(),
    ]);
}

#[test]
fn search_rejects_empty_query() {
    let result = client(EMPTY_ARRAY).games().search("", vec![]);
    assert_eq!(result, Err(ClientError::Option(OptionError::EmptyQuery)));
}

#[test]
fn offset_bound_is_configurable() {
    let (client, requests) = client_with(200, r#"[{"id": 1}]"#);
    let client = client.set_offset_bound(1000);

    let games = client.games().index(vec![igdb::option::offset(500)]).unwrap();
    assert_eq!(games[0].id, 1);
    assert_eq!(*requests.borrow(), vec!["https://api.example.com/games/?offset=500".to_owned()]);
}
