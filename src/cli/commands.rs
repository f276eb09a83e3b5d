use chrono::Local;

use crate::app::{AppContext, Result};
use crate::catalog::ChapterFilter;
use crate::domain::{Chapter, Verse};
use crate::prayer::next_prayer;

pub async fn read_chapter(ctx: &AppContext, number: u16, json: bool) -> Result<()> {
    let resolution = ctx.resolver.resolve_traced(number).await?;

    let Some(chapter) = resolution.chapter.as_ref() else {
        println!("Chapter {} not found", number);
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(chapter)?);
        return Ok(());
    }

    print_chapter(chapter);
    if let Some(source) = resolution.served_by() {
        println!("\n(source: {})", source);
    }

    Ok(())
}

fn print_chapter(chapter: &Chapter) {
    println!("{}", chapter.display_title());
    println!(
        "{} - {} verses\n",
        chapter.summary.revelation, chapter.summary.number_of_verses
    );

    for verse in &chapter.verses {
        print_verse(verse);
    }
}

fn print_verse(verse: &Verse) {
    println!("[{}] {}", verse.number_in_chapter, verse.text);
    if verse.has_transliteration() {
        println!("    {}", verse.transliteration);
    }
    println!("    {}", verse.translation);
    println!("    {}\n", verse.audio_url);
}

pub async fn list_chapters(ctx: &AppContext, filter: &ChapterFilter) -> Result<()> {
    let chapters = filter.apply(ctx.catalog.list().await);

    if chapters.is_empty() {
        println!("No chapters");
        return Ok(());
    }

    for summary in chapters {
        println!(
            "{:>3}. {} ({}) - {} [{}, {} verses]",
            summary.number,
            summary.english_name,
            summary.name,
            summary.name_translation,
            summary.revelation,
            summary.number_of_verses
        );
    }

    Ok(())
}

pub async fn show_prayer_times(ctx: &AppContext, city: Option<&str>) -> Result<()> {
    let city = city.unwrap_or_else(|| ctx.prayer.default_city());
    let schedule = ctx.prayer.timings(city).await;

    println!("Prayer times for {}", city);
    for (prayer, time) in schedule.entries() {
        println!("  {:<8} {}", prayer.local_name(), time);
    }

    let next = next_prayer(&schedule, Local::now().time());
    let day = if next.tomorrow { " (tomorrow)" } else { "" };
    println!("\nNext: {} at {}{}", next.prayer.local_name(), next.time, day);

    Ok(())
}

pub async fn probe_sources(ctx: &AppContext) -> Result<()> {
    let health = ctx.probe().await;
    let status = |up: bool| if up { "reachable" } else { "unreachable" };

    println!(
        "Primary   {}  {}",
        status(health.primary),
        ctx.config.sources.primary_base_url
    );
    println!(
        "Secondary {}  {}",
        status(health.secondary),
        ctx.config.sources.secondary_base_url
    );

    Ok(())
}
