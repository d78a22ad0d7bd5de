use polyline_codec::{PolylineCodec, PolylineError, PolylineMap, decode_levels, to_wkt};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), PolylineError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let codec = PolylineCodec::default();
    let encoded = codec.encode([(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)]);
    tracing::info!(%encoded, "encoded reference track");

    let line = codec.decode(&encoded)?;
    for coord in line.coords() {
        println!("lat: {}, lon: {}", coord.y, coord.x);
    }
    println!("WKT: {}", to_wkt(&line));

    // The full polyline is truncated, so only the summary decodes
    let map = PolylineMap::from_json(
        r#"{"id":"a1","summary_polyline":"_p~iF~ps|U","polyline":"_p~iF"}"#,
    )?;
    println!(
        "Summary points: {:?}",
        map.summary_coordinates().map(|l| l.0.len())
    );
    println!("Full points: {:?}", map.coordinates().map(|l| l.0.len()));

    println!("Levels: {:?}", decode_levels("?@AB~F")?);

    Ok(())
}
