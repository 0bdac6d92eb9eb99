//! 組織客戶端示範：以固定載荷模擬 API，展示記憶化與巢狀存取

use memokit::{access_nested, memoize, parse_path, OrgClient, QueryCache, StaticFetcher};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // 1. 巢狀存取
    let nested = json!({"a": {"b": [10, 20, 30]}});
    let value = access_nested(&nested, parse_path("a.b.1"))?;
    println!("a.b.1 = {}", value);

    if let Err(err) = access_nested(&nested, ["a", "c"]) {
        println!("預期的錯誤: {}", err);
    }

    // 2. 記憶化
    let mut slow_square = memoize(|n: &u64| {
        std::thread::sleep(std::time::Duration::from_millis(50));
        n * n
    });
    for _ in 0..3 {
        println!("square(12) = {}", slow_square.get(12));
    }
    println!("統計: {:?}", slow_square.stats());

    // 3. 查詢快取
    let mut queries = QueryCache::new();
    for _ in 0..2 {
        let rows = queries.fetch_with("SELECT * FROM users", |_| {
            Ok::<_, anyhow::Error>(vec![(1, "alice"), (2, "bob")])
        })?;
        println!("users = {:?}", rows);
    }

    // 4. 組織客戶端
    let fetcher = StaticFetcher::new()
        .with_payload(
            "https://api.github.com/orgs/google",
            json!({"repos_url": "https://api.github.com/orgs/google/repos"}),
        )
        .with_payload(
            "https://api.github.com/orgs/google/repos",
            json!([
                {"name": "repo1", "license": {"key": "apache-2.0"}},
                {"name": "repo2", "license": {"key": "mit"}},
                {"name": "repo3", "license": null},
            ]),
        );
    let client = OrgClient::new("google", fetcher);

    println!("全部倉庫: {:?}", client.public_repos(None)?);
    println!("apache-2.0: {:?}", client.public_repos(Some("apache-2.0"))?);
    println!("請求紀錄: {:?}", client.fetcher().requests());

    Ok(())
}
