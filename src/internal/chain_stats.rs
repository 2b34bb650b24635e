//! Measures chain lengths of `ChainedHashTable` under random bid ids and plots them
#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_precision_loss)]

use bidtable::{Bid, ChainedHashTable, TableExtensions};
use plotters::prelude::*;
use rand::Rng;

// Bucket counts compared, 179 is the table default
const BUCKET_COUNTS: [usize; 4] = [53, 179, 401, 797];
// Load factors (bids per bucket) from 0.25 to 3.0
const NUM_LOAD_FACTORS: usize = 12;
// Ids look like the ones of the sales export
const ID_RANGE: std::ops::Range<u32> = 10_000..100_000;

#[derive(Debug, Clone, Copy)]
struct ChainStats {
    load_factor: f64,
    average_comparisons: f64,
    longest_chain: usize,
    empty_ratio: f64,
}

fn measure(table: &ChainedHashTable) -> ChainStats {
    let lengths = table.chain_lengths();
    let stored = table.len();

    // A successful search for the k-th bid of a chain compares k ids.
    let total_comparisons: usize = lengths.iter().map(|&len| len * (len + 1) / 2).sum();
    let empty = lengths.iter().filter(|&&len| len == 0).count();

    ChainStats {
        load_factor: stored as f64 / table.capacity() as f64,
        average_comparisons: if stored == 0 { 0.0 } else { total_comparisons as f64 / stored as f64 },
        longest_chain: lengths.iter().copied().max().unwrap_or(0),
        empty_ratio: empty as f64 / table.capacity() as f64,
    }
}

fn run_experiment(
    bucket_count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<ChainStats>, bidtable::Error> {
    let mut results = Vec::with_capacity(NUM_LOAD_FACTORS);

    for step in 1..=NUM_LOAD_FACTORS {
        let target = bucket_count * step / 4;
        let mut table = ChainedHashTable::with_capacity(bucket_count)?;

        while table.len() < target {
            let id = rng.random_range(ID_RANGE).to_string();
            table.insert(Bid::new(id, "", "", 0.0));
        }

        results.push(measure(&table));
    }

    Ok(results)
}

fn plot(
    file_name: &str,
    caption: &str,
    y_desc: &str,
    series: &[(usize, Vec<(f64, f64)>)],
) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50),
        RGBColor(50, 90, 220),
        RGBColor(50, 180, 50),
        RGBColor(180, 50, 180),
    ];

    let max_x = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|&(x, _)| x))
        .fold(0.0, f64::max);
    let max_y = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|&(_, y)| y))
        .fold(0.0, f64::max) *
        1.1; // Add 10% margin

    let root = BitMapBackend::new(file_name, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_x, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Load Factor (bids per bucket)")
        .y_desc(y_desc)
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (index, (bucket_count, points)) in series.iter().enumerate() {
        let color = colors[index % colors.len()];
        let line_style = ShapeStyle::from(&color).stroke_width(2);

        chart
            .draw_series(LineSeries::new(points.iter().copied(), line_style))?
            .label(format!("{bucket_count} buckets"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(points.iter().map(|&point| Circle::new(point, 4, color.filled())))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    let mut comparisons: Vec<(usize, Vec<(f64, f64)>)> = Vec::with_capacity(BUCKET_COUNTS.len());
    let mut longest: Vec<(usize, Vec<(f64, f64)>)> = Vec::with_capacity(BUCKET_COUNTS.len());

    for bucket_count in BUCKET_COUNTS {
        println!("Testing {bucket_count} buckets");
        let results = run_experiment(bucket_count, &mut rng)?;

        for stats in &results {
            println!(
                "  load {:.2}: avg comparisons = {:.2}, longest chain = {}, empty buckets = {:.1}%",
                stats.load_factor,
                stats.average_comparisons,
                stats.longest_chain,
                stats.empty_ratio * 100.0
            );
        }

        comparisons.push((
            bucket_count,
            results.iter().map(|stats| (stats.load_factor, stats.average_comparisons)).collect(),
        ));
        longest.push((
            bucket_count,
            results.iter().map(|stats| (stats.load_factor, stats.longest_chain as f64)).collect(),
        ));
    }

    plot("average_search_comparisons.png", "Average Successful Search Cost", "Id comparisons", &comparisons)?;
    plot("longest_chain.png", "Longest Collision Chain", "Bids in chain", &longest)?;

    println!("Generated plot images: average_search_comparisons.png, longest_chain.png");

    Ok(())
}
