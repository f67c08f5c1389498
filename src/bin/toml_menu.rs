use clap::Parser;
use dinewise_engine::config::toml_config::SessionConfig;
use dinewise_engine::utils::error::ErrorSeverity;
use dinewise_engine::utils::validation::{self, Validate};
use dinewise_engine::utils::logger;
use dinewise_engine::{
    Clock, FileMenuCatalog, FilePreferenceStore, FixedClock, HttpMenuCatalog, HttpPreferenceStore,
    LocalStorage, MenuCatalog, MenuEngine, PreferenceStore, SystemClock,
};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "toml-menu")]
#[command(about = "Menu projection driven by a TOML session config")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "session-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override watch mode setting from config
    #[arg(long)]
    watch: Option<bool>,

    /// Dry run - show what would be projected without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based menu projection");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match SessionConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(watch) = args.watch {
        config
            .projection
            .get_or_insert_with(Default::default)
            .watch = Some(watch);
        tracing::info!("🔧 Watch mode overridden to: {}", watch);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    // 顯示配置摘要
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No projection will occur");
        perform_dry_run(&config);
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 依配置建立各 port 的介面卡
    let catalog: Box<dyn MenuCatalog> = match config.catalog.r#type.as_str() {
        "api" => Box::new(HttpMenuCatalog::new(
            config.catalog.endpoint.clone().unwrap_or_default(),
        )),
        _ => Box::new(FileMenuCatalog::new(
            config.catalog.path.clone().unwrap_or_default(),
        )),
    };
    let preferences: Box<dyn PreferenceStore> = match config.preferences.r#type.as_str() {
        "api" => Box::new(HttpPreferenceStore::new(
            config.preferences.endpoint.clone().unwrap_or_default(),
        )),
        _ => Box::new(FilePreferenceStore::new(
            config.preferences.path.clone().unwrap_or_default(),
        )),
    };
    let clock: Box<dyn Clock> = match config.preview_time() {
        Some(preview) => {
            let time = validation::parse_preview_time("projection.preview_time", preview)?;
            tracing::info!("🕐 Previewing prices at {}", preview);
            Box::new(FixedClock::at_time(time))
        }
        None => Box::new(SystemClock),
    };

    let engine = MenuEngine::new_with_monitoring(catalog, preferences, clock, monitor_enabled);
    let storage = LocalStorage::new(config.output.path.clone());

    // 餐廳推薦模式
    if config.recommend_mode() {
        match engine.recommend_restaurants(&config.session.user_id).await {
            Ok(restaurants) => {
                for restaurant in &restaurants {
                    let rating = restaurant
                        .average_rating()
                        .map(|v| format!("{:.1}", v))
                        .unwrap_or_else(|| "New".to_string());
                    println!(
                        "⭐ {} ({}) - rating {}",
                        restaurant.business_name, restaurant.cuisine, rating
                    );
                }
                println!("✅ Found {} matching restaurants", restaurants.len());
            }
            Err(e) => exit_with(e),
        }
        return Ok(());
    }

    let restaurant_id = config
        .session
        .restaurant_id
        .clone()
        .expect("session.restaurant_id is required outside recommend mode");

    let project_once = || async {
        let menu = engine
            .project_menu(&restaurant_id, &config.session.user_id)
            .await?;
        engine
            .export_snapshot(&storage, &menu, &config.output.formats)
            .await?;
        dinewise_engine::Result::Ok(menu)
    };

    if config.is_watch_mode() {
        // 週期性重新投影；Ctrl-C 結束
        tracing::info!(
            "🔄 Watch mode: re-projecting every {} seconds",
            config.refresh_seconds()
        );
        let mut ticker = tokio::time::interval(Duration::from_secs(config.refresh_seconds()));
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match project_once().await {
                        Ok(menu) => tracing::info!("✅ Projection refreshed ({} items)", menu.len()),
                        Err(e) => {
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

    match project_once().await {
        Ok(menu) => {
            tracing::info!("✅ Menu projection completed successfully!");
            println!("✅ Projected {} menu items", menu.len());
            println!("📁 Snapshot saved to: {}", config.output.path);
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

fn display_config_summary(config: &SessionConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Session: {}", config.session.name);
    if let Some(description) = &config.session.description {
        println!("  Description: {}", description);
    }
    println!("  User: {}", config.session.user_id);
    if let Some(restaurant_id) = &config.session.restaurant_id {
        println!("  Restaurant: {}", restaurant_id);
    }
    println!(
        "  Catalog: {} ({})",
        config.catalog.r#type,
        config
            .catalog
            .endpoint
            .as_deref()
            .or(config.catalog.path.as_deref())
            .unwrap_or("-")
    );
    println!(
        "  Preferences: {} ({})",
        config.preferences.r#type,
        config
            .preferences
            .endpoint
            .as_deref()
            .or(config.preferences.path.as_deref())
            .unwrap_or("-")
    );
    println!("  Output: {}", config.output.path);
    println!("  Formats: {}", config.output.formats.join(", "));
    println!("  Refresh: every {}s", config.refresh_seconds());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &SessionConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("📡 Data Sources:");
    println!(
        "  Catalog: {} source",
        config.catalog.r#type
    );
    println!(
        "  Preferences: {} source",
        config.preferences.r#type
    );

    println!();
    println!("⚙️ Projection Mode:");
    if config.recommend_mode() {
        println!("  ⭐ Restaurant recommendation mode");
    } else if config.is_watch_mode() {
        println!(
            "  🔄 Watch mode: would re-project every {} seconds",
            config.refresh_seconds()
        );
    } else {
        println!("  🍽️ Single projection");
    }
    if let Some(preview) = config.preview_time() {
        println!("  🕐 Fixed preview time: {}", preview);
    }

    println!();
    println!("💾 Output Configuration:");
    println!("  Path: {}", config.output.path);
    println!("  Formats: {}", config.output.formats.join(", "));

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}

fn exit_with(e: dinewise_engine::EngineError) {
    tracing::error!(
        "❌ Projection failed: {} (Category: {:?}, Severity: {:?})",
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
