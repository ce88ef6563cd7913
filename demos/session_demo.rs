//! # Session and Expiry Demo
//!
//! This example walks through:
//! - Building the cache store from configuration
//! - Expiring, never-expiring and extended entries
//! - Session creation, lookup, renewal and expiry
//! - Read-through caching of reference data
//!
//! Run with `RUST_LOG=debug cargo run --example session_demo --features debug-logging`
//! to see the sweeper at work.

use memstash::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

struct DemoCountries;

#[async_trait]
impl MasterDataRepository for DemoCountries {
    async fn load_countries(&self) -> anyhow::Result<Vec<Country>> {
        println!("   (loading countries from repository)");
        Ok(vec![
            Country::new("TH", "Thailand")
                .with_currency(Currency::new("THB"))
                .with_calling_code(66),
            Country::new("CH", "Switzerland")
                .with_currency(Currency::new("CHF"))
                .with_calling_code(41),
        ])
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🚀 Memstash Session Demo");
    println!("========================");

    let config = AppConfig {
        cache: CacheConfig::default().with_sweep_interval(Duration::from_millis(250)),
        session: SessionConfig::default(),
    };
    let memstash = Memstash::new(config)?;
    let cache = memstash.cache();

    // 1. Expiry semantics
    println!("\n⏱️  Expiry");
    println!("---------");

    let _ = cache.set("short", "gone soon", Ttl::secs(1));
    let _ = cache.set("forever", "always here", Ttl::Never);
    let _ = cache.set("extended", "kept alive", Ttl::secs(1));
    let _ = cache.extend_expiry("extended", Ttl::secs(3));

    println!("Entries after writes: {}", cache.len());
    tokio::time::sleep(Duration::from_millis(1500)).await;

    for key in ["short", "forever", "extended"] {
        println!("{:>9} -> {:?}", key, cache.get::<String>(key));
    }
    println!("Stats: {:?}", cache.stats());

    // 2. Sessions
    println!("\n🔑 Sessions");
    println!("-----------");

    let people = InMemoryPersonDirectory::new();
    people.insert(PersonRecord::new("p-1", "jane@example.com").with_business_unit("bu-001"));
    let sessions = memstash.session_service(Arc::new(people));

    let session = sessions.init("jane@example.com").await?;
    println!("Started {:?}", session);
    println!("Lookup  {:?}", sessions.get(&session.id).await);

    sessions.reset_expiry(&session.id).await;
    println!("Renewed for another {:?}", memstash.config().session.ttl_duration());

    sessions.expire(&session.id).await;
    println!("After expire: {:?}", sessions.get(&session.id).await);

    // 3. Reference data
    println!("\n🌍 Countries");
    println!("------------");

    let master_data = memstash.master_data(Arc::new(DemoCountries));
    let first = master_data.load_countries().await?;
    let second = master_data.load_countries().await?;
    println!("First load: {} countries, second load: {} (from cache)", first.len(), second.len());

    memstash.shutdown().await;
    println!("\n✅ Sweeper stopped, done");
    Ok(())
}
