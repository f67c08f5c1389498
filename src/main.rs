use clap::Parser;
use dinewise_engine::utils::error::{EngineError, ErrorSeverity};
use dinewise_engine::utils::validation::{self, Validate};
use dinewise_engine::utils::logger;
use dinewise_engine::{
    CliConfig, Clock, FileMenuCatalog, FilePreferenceStore, FixedClock, HttpMenuCatalog,
    HttpPreferenceStore, LocalStorage, MenuCatalog, MenuEngine, PreferenceStore,
    ProjectedMenuItem, Restaurant, SystemClock,
};
use std::time::Duration;

type BoxedEngine = MenuEngine<Box<dyn MenuCatalog>, Box<dyn PreferenceStore>, Box<dyn Clock>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting dinewise-engine CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 建立各 port 的介面卡：檔案或 HTTP 來源在執行期決定
    let catalog: Box<dyn MenuCatalog> = match &config.catalog_url {
        Some(url) => Box::new(HttpMenuCatalog::new(url.clone())),
        None => Box::new(FileMenuCatalog::new(config.catalog_file.clone())),
    };
    let preferences: Box<dyn PreferenceStore> = match &config.preferences_url {
        Some(url) => Box::new(HttpPreferenceStore::new(url.clone())),
        None => Box::new(FilePreferenceStore::new(config.preferences_file.clone())),
    };
    let clock: Box<dyn Clock> = match &config.at {
        Some(at) => {
            let time = validation::parse_preview_time("at", at)?;
            tracing::info!("🕐 Previewing prices at {}", at);
            Box::new(FixedClock::at_time(time))
        }
        None => Box::new(SystemClock),
    };

    let engine = MenuEngine::new_with_monitoring(catalog, preferences, clock, monitor_enabled);

    // 餐廳推薦模式：列出符合偏好的餐廳後結束
    if config.recommend {
        match engine.recommend_restaurants(&config.user_id).await {
            Ok(restaurants) => {
                display_recommendations(&restaurants);
                println!("✅ Found {} matching restaurants", restaurants.len());
            }
            Err(e) => fail(e),
        }
        return Ok(());
    }

    let restaurant_id = config
        .restaurant_id
        .clone()
        .expect("restaurant_id is required unless --recommend is set");
    let storage = LocalStorage::new(config.output_path.clone());

    if config.watch {
        // 每 N 秒重新投影一次；Ctrl-C 停止計時器，不留背景任務
        tracing::info!(
            "🔄 Watch mode: re-projecting every {} seconds",
            config.refresh_seconds
        );
        let mut ticker = tokio::time::interval(Duration::from_secs(config.refresh_seconds));
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match run_projection(&engine, &storage, &config, &restaurant_id).await {
                        Ok(menu) => {
                            tracing::info!("✅ Projection refreshed ({} items)", menu.len());
                        }
                        Err(e) => {
                            // 單次 tick 失敗不中斷監看，下一輪再試
                            tracing::error!("❌ Projection failed: {}", e);
                            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                        }
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("👋 Stopping refresh loop");
                    break;
                }
            }
        }
        return Ok(());
    }

    match run_projection(&engine, &storage, &config, &restaurant_id).await {
        Ok(_) => {
            tracing::info!("✅ Menu projection completed successfully!");
            println!("✅ Menu projection completed successfully!");
            println!("📁 Snapshot saved to: {}", config.output_path);
        }
        Err(e) => fail(e),
    }

    Ok(())
}

async fn run_projection(
    engine: &BoxedEngine,
    storage: &LocalStorage,
    config: &CliConfig,
    restaurant_id: &str,
) -> dinewise_engine::Result<Vec<ProjectedMenuItem>> {
    let menu = engine.project_menu(restaurant_id, &config.user_id).await?;
    display_menu(&menu);

    let written = engine
        .export_snapshot(storage, &menu, &config.output_formats)
        .await?;
    tracing::info!("📁 Snapshot files: {}", written.join(", "));

    Ok(menu)
}

fn display_menu(menu: &[ProjectedMenuItem]) {
    if menu.is_empty() {
        println!("No menu items match your dietary preferences.");
        return;
    }

    println!("🍽️ Personalized menu:");
    for entry in menu {
        let star = if entry.is_recommended() { "⭐" } else { "  " };
        let flame = if entry.item.is_spicy { " 🌶" } else { "" };
        println!(
            "{} {} - ${:.2} (was ${:.2}, score {}){}",
            star,
            entry.item.name,
            entry.dynamic_price,
            entry.original_price,
            entry.recommendation_score,
            flame
        );
    }
}

fn display_recommendations(restaurants: &[Restaurant]) {
    println!("⭐ Recommended restaurants:");
    for restaurant in restaurants {
        let rating = restaurant
            .average_rating()
            .map(|v| format!("{:.1}", v))
            .unwrap_or_else(|| "New".to_string());
        println!(
            "  {} ({}) - rating {}",
            restaurant.business_name, restaurant.cuisine, rating
        );
    }
}

// 記錄詳細錯誤並依嚴重程度決定退出碼
fn fail(e: EngineError) {
    tracing::error!(
        "❌ Engine run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}
