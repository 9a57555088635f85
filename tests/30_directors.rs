mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

/// Unique per-run suffix so repeated runs against a persistent database do not
/// collide on director ids or movie titles.
fn nonce() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[tokio::test]
async fn director_create_resolves_titles_to_identifiers() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_available(server).await {
        eprintln!("skipping director_create test: database unavailable");
        return Ok(());
    }

    let client = reqwest::Client::new();
    let token = common::login(server).await?;
    let n = nonce();
    let title = format!("Inception-{}", n);

    // POST /movies first so the title can be resolved
    let res = client
        .post(format!("{}/movies", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "title": title, "year": 2010, "director": "Nolan" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let movie = res.json::<serde_json::Value>().await?;
    let movie_id = movie["id"].as_str().expect("movie id").to_string();

    // POST /directors referencing the movie by title
    let res = client
        .post(format!("{}/directors", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "id": n, "name": "Nolan", "country": "UK", "movies": [title] }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let director = res.json::<serde_json::Value>().await?;
    let resolved = director["movies"].as_array().expect("movies array");
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0], movie_id.as_str());
    Ok(())
}

#[tokio::test]
async fn director_create_with_unknown_title_writes_nothing() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_available(server).await {
        eprintln!("skipping unknown-title test: database unavailable");
        return Ok(());
    }

    let client = reqwest::Client::new();
    let token = common::login(server).await?;
    let n = nonce();

    let count_before = client
        .get(format!("{}/directors", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?
        .json::<Vec<serde_json::Value>>()
        .await?
        .len();

    let res = client
        .post(format!("{}/directors", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "id": n,
            "name": "X",
            "country": "Y",
            "movies": [format!("NoSuchFilm-{}", n)]
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // No partial creation
    let count_after = client
        .get(format!("{}/directors", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?
        .json::<Vec<serde_json::Value>>()
        .await?
        .len();
    assert_eq!(count_before, count_after);
    Ok(())
}

#[tokio::test]
async fn director_get_update_delete_by_caller_assigned_id() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_available(server).await {
        eprintln!("skipping director lifecycle test: database unavailable");
        return Ok(());
    }

    let client = reqwest::Client::new();
    let token = common::login(server).await?;
    let n = nonce();

    // Create with no movie references
    let res = client
        .post(format!("{}/directors", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "id": n, "name": "Villeneuve", "country": "Canada", "movies": [] }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    // Get by the caller-assigned id
    let res = client
        .get(format!("{}/directors/{}", server.base_url, n))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let director = res.json::<serde_json::Value>().await?;
    assert_eq!(director["name"], "Villeneuve");

    // Update writes the movies field verbatim (ids, no resolution)
    let res = client
        .put(format!("{}/directors/{}", server.base_url, n))
        .bearer_auth(&token)
        .json(&json!({ "name": "Denis Villeneuve", "country": "Canada", "movies": [] }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = res.json::<serde_json::Value>().await?;
    assert_eq!(updated["name"], "Denis Villeneuve");

    // Delete
    let res = client
        .delete(format!("{}/directors/{}", server.base_url, n))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Gone afterwards
    let res = client
        .get(format!("{}/directors/{}", server.base_url, n))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn unknown_director_id_is_not_found() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_available(server).await {
        eprintln!("skipping unknown-director test: database unavailable");
        return Ok(());
    }

    let client = reqwest::Client::new();
    let token = common::login(server).await?;
    // Negative ids are never assigned by these tests
    let bogus = -42;

    for res in [
        client
            .get(format!("{}/directors/{}", server.base_url, bogus))
            .bearer_auth(&token)
            .send()
            .await?,
        client
            .put(format!("{}/directors/{}", server.base_url, bogus))
            .bearer_auth(&token)
            .json(&json!({ "name": "N", "country": "C", "movies": [] }))
            .send()
            .await?,
        client
            .delete(format!("{}/directors/{}", server.base_url, bogus))
            .bearer_auth(&token)
            .send()
            .await?,
    ] {
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
    Ok(())
}
