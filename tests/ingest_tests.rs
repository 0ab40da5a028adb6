use scatterplot_rs::ChartError;
use scatterplot_rs::ingest::{lenient_number, parse_rows};

const DATASET: &str = "\
Country,Year, Population (000s) ,Population_Density,Population_Growth_Rate,Region
China,2000,\"1,267,430\",135.0,0.79%,Asia and Pacific
Noiseland,2000,5000,25.5,~1.30*,Europe and Africa
Zeroville,2000,1000,10.0,0.0,America
Badrow,2000,not-a-number,10.0,1.0,America
Chile,2001,\"15,420\",20.4,1.24,America
";

#[test]
fn rows_are_parsed_with_noise_tolerance() {
    let rows = parse_rows(DATASET).expect("parse");

    assert_eq!(rows.len(), 3);

    let china = &rows[0];
    assert_eq!(china.country, "China");
    assert_eq!(china.region, "Asia and Pacific");
    assert_eq!(china.year, 2000);
    assert_eq!(china.population, 1_267_430.0);
    assert_eq!(china.population_density, 135.0);
    assert_eq!(china.population_growth_rate, 0.79);

    assert_eq!(rows[1].population_growth_rate, 1.30);
    assert_eq!(rows[2].country, "Chile");
}

#[test]
fn zero_growth_rows_are_dropped() {
    let rows = parse_rows(DATASET).expect("parse");
    assert!(rows.iter().all(|row| row.country != "Zeroville"));
}

#[test]
fn unparseable_rows_are_dropped_without_failing_the_load() {
    let rows = parse_rows(DATASET).expect("parse");
    assert!(rows.iter().all(|row| row.country != "Badrow"));
}

#[test]
fn plain_population_header_is_accepted() {
    let text = "Country,Year,Population (000s),Population_Density,Population_Growth_Rate\n\
                Chad,1999,8000,6.5,3.1\n";
    let rows = parse_rows(text).expect("parse");
    assert_eq!(rows.len(), 1);
    // Region column is optional; absent means an empty label.
    assert_eq!(rows[0].region, "");
}

#[test]
fn missing_required_column_fails_the_load() {
    let text = "Country,Year,Population_Density,Population_Growth_Rate\nChad,1999,6.5,3.1\n";
    let result = parse_rows(text);
    assert!(matches!(
        result,
        Err(ChartError::Parse {
            field: "Population (000s)",
            ..
        })
    ));
}

#[test]
fn empty_input_fails_the_load() {
    assert!(parse_rows("").is_err());
    assert!(parse_rows("\n\n").is_err());
}

#[test]
fn lenient_number_extracts_a_single_numeric_run() {
    assert_eq!(lenient_number("1.2%").expect("percent"), 1.2);
    assert_eq!(lenient_number("~ 3.4 *").expect("noise"), 3.4);
    assert_eq!(lenient_number("-0.5").expect("negative"), -0.5);
    assert_eq!(lenient_number(" 12 ").expect("padded"), 12.0);
    assert_eq!(lenient_number("+2.75").expect("signed"), 2.75);
}

#[test]
fn lenient_number_rejects_ambiguous_input() {
    assert!(lenient_number("1.2.3").is_err());
    assert!(lenient_number("1,2").is_err());
    assert!(lenient_number("abc").is_err());
    assert!(lenient_number("").is_err());
    assert!(lenient_number(".5").is_err());
}
