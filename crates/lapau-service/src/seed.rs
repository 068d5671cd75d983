//! First-run seeding
//!
//! When every slice is empty the forum would greet its first visitor
//! with a blank page, so a small set of illustrative users, threads,
//! comments, and ads is written once. Seeded data goes through the same
//! entity mutators as live data, so every denormalized counter starts
//! consistent.

use tracing::{info, instrument};

use lapau_core::{
    AdPlacement, Advertisement, Category, Comment, ReactionKind, Thread, User, UserRole,
};

use crate::services::{ServiceContext, ServiceResult};

/// Populate the collections with starting content when all are empty
///
/// Returns whether anything was written.
#[instrument(skip(ctx))]
pub async fn seed_if_empty(ctx: &ServiceContext) -> ServiceResult<bool> {
    let has_content = !ctx.user_repo().list().await?.is_empty()
        || !ctx.thread_repo().list().await?.is_empty()
        || !ctx.ad_repo().list().await?.is_empty();
    if has_content {
        return Ok(false);
    }

    let admin = User::with_role(
        ctx.generate_id(),
        "niniak_mamak".to_string(),
        UserRole::Admin,
    );
    let mut siti = User::new(ctx.generate_id(), "siti".to_string());
    let mut budi = User::new(ctx.generate_id(), "budi".to_string());

    // An approved thread by siti, with one reaction and one comment
    let mut warung = Thread::new(
        ctx.generate_id(),
        &siti,
        "Dima lamang paliang lamak di pasa?".to_string(),
        "Ambo sadang mancari lamang nan paliang lamak. Ado rekomendasi?".to_string(),
        Category::LapauUmum,
        false,
    );
    warung.approve()?;
    siti.record_approved_post();

    warung.reactions.toggle(budi.id, ReactionKind::Rendang);
    siti.set_reaction_total(warung.reactions.total() as u32);

    let balasan = Comment::new(
        ctx.generate_id(),
        warung.id,
        &budi,
        "Di pasa ateh, sabalah kadai kopi. Jan lupo bali pagi-pagi.".to_string(),
        None,
        false,
    );
    warung.record_comment_added();

    // An approved thread by budi, untouched
    let mut ota = Thread::new(
        ctx.generate_id(),
        &budi,
        "Ota soal jalan baru ka kampuang".to_string(),
        "Kaba e jalan ka kampuang ka diaspal taun ko. Lai picayo sanak?".to_string(),
        Category::OtaViral,
        false,
    );
    ota.approve()?;
    budi.record_approved_post();

    // An anonymous thread still in the moderation queue
    let curhat = Thread::new(
        ctx.generate_id(),
        &siti,
        "Malu batanyo di lapau".to_string(),
        "Baa caro e mambuek kawan-kawan di lapau baru?".to_string(),
        Category::CurhatLapau,
        true,
    );

    for user in [&admin, &siti, &budi] {
        ctx.user_repo().create(user).await?;
    }
    for thread in [&warung, &ota, &curhat] {
        ctx.thread_repo().create(thread).await?;
    }
    ctx.comment_repo().create(&balasan).await?;

    let mut sidebar = Advertisement::new(
        ctx.generate_id(),
        "Rendang Uni Pesan Antar".to_string(),
        "Rendang asli Payakumbuh, dimasak jo kayu bakar.".to_string(),
        AdPlacement::Sidebar,
    );
    sidebar.target_url = Some("https://example.com/rendang-uni".to_string());

    let feed_ad_one = Advertisement::new(
        ctx.generate_id(),
        "Kopi Khop Pasisia".to_string(),
        "Kopi tabaliak khas pasisia, kini bisa dipasan online.".to_string(),
        AdPlacement::BetweenThreads,
    );
    let feed_ad_two = Advertisement::new(
        ctx.generate_id(),
        "Sarikayo Bundo".to_string(),
        "Sarikayo lambuik untuak buko puaso.".to_string(),
        AdPlacement::BetweenThreads,
    );

    for ad in [&sidebar, &feed_ad_one, &feed_ad_two] {
        ctx.ad_repo().create(ad).await?;
    }

    info!(
        users = 3,
        threads = 3,
        comments = 1,
        ads = 3,
        "Seed data written"
    );
    Ok(true)
}
