use migration::{Migrator, MigratorTrait};
use magazine_subscriptions::{
    configuration::get_configuration,
    startup::run,
    telemetry::{get_subscriber, init_subscriber},
};
use sea_orm::Database;
use secrecy::ExposeSecret;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    let subscriber = get_subscriber(
        "magazine_subscriptions".into(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("读取配置失败");

    let db = Database::connect(configuration.database.with_db().expose_secret().as_str())
        .await
        .expect("连接数据库失败");
    // 启动时执行 migration
    Migrator::up(&db, None).await.expect("执行 migration 失败");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address).await.expect("绑定端口失败");

    run(listener, db).await;
}
