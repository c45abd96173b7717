//! End-to-end pipeline scenarios over a small synthetic policy.
//!
//! The policy uses round numbers (two whole-dollar brackets per
//! jurisdiction, a 90% earnings factor, a 50% bond fund percentage) so
//! every expected value here can be recomputed by hand.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

use ten40_core::{FactError, FactItem, Facts, RawAmount, Tag};
use ten40_engine::{
    compute_all_taxes, compute_federal_total_tax, compute_ny_total_tax, federal,
    marginal_rate_table, marginal_rate_table_by_input, marginal_rate_table_by_tag, ny,
    EngineError, GraphError, LineNode, Pipeline, Verifier,
};
use ten40_policy::Policy;

fn policy() -> Policy {
    serde_json::from_str(
        r#"{
            "self_employment_tax": {
                "earnings_factor": "0.9",
                "social_security_wage_base": "100000",
                "social_security_rate": "0.1",
                "medicare_rate": "0.02"
            },
            "additional_medicare_tax": {"rate": "0.01", "threshold": "200000"},
            "net_investment_income_tax": {"rate": "0.05", "threshold": "250000"},
            "state_local_tax_deduction": {"cap": "10000"},
            "standard_deduction": "20000",
            "tax_computation_worksheet": {
                "min_income": "0",
                "sections": [
                    {"min": "0", "max": "50000", "rate": "0.10", "subtract_amount": "0"},
                    {"min": "50000", "max": null, "rate": "0.20", "subtract_amount": "5000"}
                ]
            },
            "capital_gains": {
                "zero_rate_threshold": "40000",
                "twenty_rate_threshold": "400000",
                "rate_15": "0.15",
                "rate_20": "0.20"
            },
            "section_1256": {"short_term_rate": "0.40", "long_term_rate": "0.60"},
            "ny_nys_tax_rate_schedule": [
                {"min": "0", "max": "20000", "base_tax": "0", "rate": "0.04"},
                {"min": "20000", "max": null, "base_tax": "800", "rate": "0.06"}
            ],
            "nyc_resident_tax_rate_schedule": [
                {"min": "0", "max": "30000", "base_tax": "0", "rate": "0.03"},
                {"min": "30000", "max": null, "base_tax": "900", "rate": "0.035"}
            ],
            "ny_standard_deduction": "16000",
            "ny_dependent_exemption_amount": "1000",
            "ny_mctmt_rates": {"zone_1": "0.01"},
            "ny_mctmt": {"earnings_factor": "0.8"},
            "ny_us_gov_bond_interest_percentages": {"fund_a": "0.5"},
            "ny_it219_income_factor": {
                "lower_threshold": "42000",
                "upper_threshold": "142000",
                "lower_factor": "1.00",
                "upper_factor": "0.23"
            },
            "ny_tax_computation_worksheet_4": {
                "recapture_base_amount": "0",
                "incremental_benefit_addback": "0"
            }
        }"#,
    )
    .unwrap()
}

/// A W-2 only return: 150000 of wages and zeroed partnership inputs.
fn wage_facts() -> Facts {
    serde_json::from_str(
        r#"{
            "w2.json": [
                {"Amount": 150000, "Tags": ["form_1040_line_1z_wages"], "Path": "Box 1",
                 "Explanation": "Wages, tips, other compensation"},
                {"Amount": 150000, "Tags": ["w2_box_5_medicare_wages"], "Path": "Box 5"}
            ],
            "k1.json": [
                {"Amount": 0, "Tags": ["schedule_se_k1_box_14a_self_employment_earnings"],
                 "Path": "Part III line 14a"},
                {"Amount": 0, "Tags": ["section_179_deduction"], "Path": "Part III line 12"},
                {"Amount": 0, "Tags": ["mctmt_base_ordinary_income"], "Path": "Part III line 1"},
                {"Amount": 0, "Tags": ["mctmt_base_guaranteed_payments"], "Path": "Part III line 4"}
            ],
            "household.json": [
                {"Amount": 0, "Tags": ["ny_dependents_count"], "Path": "Dependents claimed"}
            ]
        }"#,
    )
    .unwrap()
}

fn add_fact(facts: &mut Facts, source: &str, tag: Tag, amount: Decimal) {
    facts.insert_source(
        source,
        vec![FactItem {
            amount: RawAmount::Number(amount),
            tags: vec![tag],
            path: String::new(),
            explanation: String::new(),
        }],
    );
}

// ---- wage-only scenario ----
//
// Federal: 150000 - 20000 standard = 130000 taxable, second bracket
// gives 130000 * 0.20 - 5000 = 21000, nothing else owed.
// NY: 150000 - 16000 standard = 134000 taxable; State 800 + 114000 *
// 0.06 = 7640, City 900 + 104000 * 0.035 = 4540, total 12180.

#[test]
fn test_wage_scenario_federal_total() {
    let total = compute_federal_total_tax(&wage_facts(), &policy(), None).unwrap();
    assert_eq!(total, dec!(21000));
}

#[test]
fn test_wage_scenario_ny_total() {
    let total = compute_ny_total_tax(&wage_facts(), &policy(), None).unwrap();
    assert_eq!(total, dec!(12180));
}

#[test]
fn test_wage_scenario_federal_line_values() {
    let facts = wage_facts();
    let policy = policy();
    let index = facts.index();
    let values = federal::pipeline().unwrap().run(&index, &policy, None).unwrap();

    assert_eq!(
        values.get("federal.schedule_se.line_12_self_employment_tax").unwrap(),
        dec!(0)
    );
    assert_eq!(
        values.get("federal.form_1040.line_9_total_income").unwrap(),
        dec!(150000)
    );
    assert_eq!(
        values.get("federal.form_1040.line_15_taxable_income").unwrap(),
        dec!(130000)
    );
    assert_eq!(
        values
            .get("federal.form_1040_qualified_dividends_capital_gain_worksheet.line_25_tax_on_all_income")
            .unwrap(),
        dec!(21000)
    );
    assert_eq!(
        values.get("federal.form_1040.line_24_total_tax").unwrap(),
        dec!(21000)
    );
}

#[test]
fn test_wage_scenario_ny_line_values() {
    let facts = wage_facts();
    let policy = policy();
    let index = facts.index();
    let values = ny::pipeline().unwrap().run(&index, &policy, None).unwrap();

    assert_eq!(
        values.get("ny.it_201.line_38_ny_taxable_income").unwrap(),
        dec!(134000)
    );
    assert_eq!(
        values.get("ny.it_201.line_39_nys_tax_on_line_38").unwrap(),
        dec!(7640)
    );
    assert_eq!(
        values.get("ny.it_201.line_47a_nyc_resident_tax").unwrap(),
        dec!(4540)
    );
    assert_eq!(
        values
            .get("ny.it_2105_9.worksheet_4a_line_1_net_earnings_zone_1")
            .unwrap(),
        dec!(0)
    );
    assert_eq!(values.get("ny.it_201.line_62_total_taxes").unwrap(), dec!(12180));
}

#[test]
fn test_ny_federal_intermediates_match_federal_pipeline() {
    let facts = wage_facts();
    let policy = policy();
    let index = facts.index();
    let federal_values = federal::pipeline().unwrap().run(&index, &policy, None).unwrap();
    let ny_values = ny::pipeline().unwrap().run(&index, &policy, None).unwrap();

    for key in [
        "federal.schedule_se.line_6_total_se_earnings",
        "federal.schedule_1.line_26_adjustments_to_income",
        "federal.schedule_d.line_16_net_capital_gain",
        "federal.form_1040.line_9_total_income",
    ] {
        assert_eq!(
            federal_values.get(key).unwrap(),
            ny_values.get(key).unwrap(),
            "{key}"
        );
    }
}

#[test]
fn test_compute_all_taxes_sums_pipelines() {
    let totals = compute_all_taxes(&wage_facts(), &policy(), None).unwrap();
    assert_eq!(totals.federal, dec!(21000));
    assert_eq!(totals.ny, dec!(12180));
    assert_eq!(totals.total, totals.federal + totals.ny);
}

// ---- verification ----

#[test]
fn test_verifier_accepts_matching_expected_tree() {
    let verifier = Verifier::new(json!({
        "federal": {
            "schedule_se": {"line_12_self_employment_tax": 0},
            "form_1040": {
                "line_9_total_income": 150000,
                "line_15_taxable_income": 130000,
                "line_24_total_tax": 21000
            },
            "compute_total_tax": 21000
        },
        "ny": {
            "it_201": {
                "line_38_ny_taxable_income": 134000,
                "line_39_nys_tax_on_line_38": 7640,
                "line_47a_nyc_resident_tax": 4540
            },
            "compute_total_tax": 12180
        }
    }));
    let totals = compute_all_taxes(&wage_facts(), &policy(), Some(&verifier)).unwrap();
    assert_eq!(totals.total, dec!(33180));
}

#[test]
fn test_verifier_reports_first_mismatching_line() {
    // Both taxable income and total tax are wrong; taxable income is
    // computed first, so it is the one reported.
    let verifier = Verifier::with_context(
        json!({
            "federal": {
                "form_1040": {
                    "line_15_taxable_income": 999,
                    "line_24_total_tax": 5
                }
            }
        }),
        "wage scenario",
    );
    let err = compute_federal_total_tax(&wage_facts(), &policy(), Some(&verifier)).unwrap_err();
    match err {
        EngineError::Verify(mismatch) => {
            assert_eq!(mismatch.path, "federal.form_1040.line_15_taxable_income");
            assert_eq!(mismatch.expected, dec!(999));
            assert_eq!(mismatch.actual, dec!(130000));
            assert_eq!(
                mismatch.to_string(),
                "[wage scenario] federal.form_1040.line_15_taxable_income: expected 999, got 130000"
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_verifier_ignores_paths_outside_the_tree() {
    let verifier = Verifier::new(json!({"unrelated": {"thing": 1}}));
    let totals = compute_all_taxes(&wage_facts(), &policy(), Some(&verifier)).unwrap();
    assert_eq!(totals.total, dec!(33180));
}

// ---- overrides ----

#[test]
fn test_agi_override_replaces_income_chain() {
    let mut facts = wage_facts();
    add_fact(
        &mut facts,
        "overrides.json",
        Tag::Form1040Line11AdjustedGrossIncome,
        dec!(100000),
    );
    // 100000 - 20000 = 80000 taxable, 80000 * 0.20 - 5000 = 11000.
    let totals = compute_all_taxes(&facts, &policy(), None).unwrap();
    assert_eq!(totals.federal, dec!(11000));
    // IT-201 starts from line 9 income, not AGI, so NY is unchanged.
    assert_eq!(totals.ny, dec!(12180));
}

#[test]
fn test_zero_agi_override_is_ignored() {
    let mut facts = wage_facts();
    add_fact(
        &mut facts,
        "overrides.json",
        Tag::Form1040Line11AdjustedGrossIncome,
        dec!(0),
    );
    let total = compute_federal_total_tax(&facts, &policy(), None).unwrap();
    assert_eq!(total, dec!(21000));
}

#[test]
fn test_itemized_deduction_override() {
    let mut facts = wage_facts();
    add_fact(
        &mut facts,
        "schedule_a.json",
        Tag::Form1040Line12Deductions,
        dec!(30000),
    );
    // 150000 - 30000 = 120000 taxable, 120000 * 0.20 - 5000 = 19000.
    let total = compute_federal_total_tax(&facts, &policy(), None).unwrap();
    assert_eq!(total, dec!(19000));
}

#[test]
fn test_tax_override_short_circuits_worksheet() {
    let mut facts = wage_facts();
    add_fact(&mut facts, "overrides.json", Tag::Form1040Line16Tax, dec!(5000));
    let total = compute_federal_total_tax(&facts, &policy(), None).unwrap();
    assert_eq!(total, dec!(5000));
}

// ---- self-employment scenario ----

#[test]
fn test_se_scenario_federal_and_ny() {
    let mut facts = wage_facts();
    facts.insert_source(
        "k1.json",
        vec![
            FactItem {
                amount: RawAmount::Number(dec!(50000)),
                tags: vec![Tag::ScheduleSeK1Box14aSelfEmploymentEarnings],
                path: "Part III line 14a".to_string(),
                explanation: String::new(),
            },
            FactItem {
                amount: RawAmount::Number(dec!(10000)),
                tags: vec![Tag::Section179Deduction],
                path: "Part III line 12".to_string(),
                explanation: String::new(),
            },
            FactItem {
                amount: RawAmount::Number(dec!(0)),
                tags: vec![Tag::MctmtBaseOrdinaryIncome],
                path: "Part III line 1".to_string(),
                explanation: String::new(),
            },
            FactItem {
                amount: RawAmount::Number(dec!(0)),
                tags: vec![Tag::MctmtBaseGuaranteedPayments],
                path: "Part III line 4".to_string(),
                explanation: String::new(),
            },
        ],
    );
    let policy = policy();

    // SE: profit 40000, earnings 36000, tax 3600 + 720 = 4320, half
    // deductible. The 179 deduction also flows through Schedule E into
    // a 10000 income reduction, so line 9 is 140000 and AGI 137840.
    let index = facts.index();
    let values = federal::pipeline().unwrap().run(&index, &policy, None).unwrap();
    assert_eq!(
        values.get("federal.schedule_se.line_12_self_employment_tax").unwrap(),
        dec!(4320)
    );
    assert_eq!(
        values.get("federal.schedule_1.line_26_adjustments_to_income").unwrap(),
        dec!(2160)
    );
    assert_eq!(
        values.get("federal.schedule_e.line_32_total_partnership_income").unwrap(),
        dec!(-10000)
    );
    assert_eq!(
        values.get("federal.form_1040.line_11_adjusted_gross_income").unwrap(),
        dec!(137840)
    );
    // Tax 117840 * 0.20 - 5000 = 18568, plus 4320 of SE tax.
    assert_eq!(
        values.get("federal.compute_total_tax").unwrap(),
        dec!(22888)
    );

    // NY: 137840 - 16000 = 121840 taxable; State 800 + 101840 * 0.06
    // rounds to 6910, City 900 + 91840 * 0.035 rounds to 4114.
    let ny_total = compute_ny_total_tax(&facts, &policy, None).unwrap();
    assert_eq!(ny_total, dec!(11024));
}

// ---- partnership scenario ----

#[test]
fn test_partnership_scenario_flows_to_mctmt() {
    let mut facts = wage_facts();
    add_fact(
        &mut facts,
        "k1_partner.json",
        Tag::MctmtBaseOrdinaryIncome,
        dec!(100000),
    );
    add_fact(
        &mut facts,
        "k1_partner_gp.json",
        Tag::MctmtBaseGuaranteedPayments,
        dec!(50000),
    );
    // Schedule E picks up the 150000 of K-1 income, so line 9 doubles
    // to 300000 and taxable income is 280000.
    let totals = compute_all_taxes(&facts, &policy(), None).unwrap();
    assert_eq!(totals.federal, dec!(51000));
    // NY: 284000 taxable gives State 16640 and City 9790; the MCTMT
    // base is 150000 * 0.8 = 120000 at 1%, so 1200 more.
    assert_eq!(totals.ny, dec!(27630));
    assert_eq!(totals.total, dec!(78630));
}

// ---- New York specifics ----

#[test]
fn test_bond_interest_subtraction() {
    let mut facts = wage_facts();
    add_fact(
        &mut facts,
        "1099_div.json",
        Tag::us_gov_bond_fund("fund_a"),
        dec!(10000),
    );
    // Half of the 10000 is U.S. government interest: 134000 - 5000 =
    // 129000 taxable, State 7340 plus City 4365.
    let total = compute_ny_total_tax(&facts, &policy(), None).unwrap();
    assert_eq!(total, dec!(11705));
}

#[test]
fn test_dependent_exemptions_reduce_ny_only() {
    let mut facts = wage_facts();
    add_fact(&mut facts, "dependents.json", Tag::NyDependentsCount, dec!(2));
    // 134000 - 2000 = 132000 taxable, State 7520 plus City 4470.
    let totals = compute_all_taxes(&facts, &policy(), None).unwrap();
    assert_eq!(totals.federal, dec!(21000));
    assert_eq!(totals.ny, dec!(11990));
}

#[test]
fn test_missing_required_tag_errors() {
    let facts: Facts = serde_json::from_str(
        r#"{
            "w2.json": [
                {"Amount": 150000, "Tags": ["form_1040_line_1z_wages"], "Path": "Box 1"}
            ]
        }"#,
    )
    .unwrap();
    let err = compute_federal_total_tax(&facts, &policy(), None).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Fact(FactError::MissingRequiredTag { .. })
    ));
}

// ---- marginal tables ----

fn parsed(cell: &str) -> Decimal {
    cell.parse().unwrap()
}

#[test]
fn test_marginal_by_tag_wages_row() {
    let table = marginal_rate_table_by_tag(&wage_facts(), &policy(), dec!(1000)).unwrap();
    let mut lines = table.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Tag|Num Inputs|Sources+Paths|Amount|Marginal Federal|Marginal NY|Marginal Total"
    );

    let wages: Vec<&str> = table
        .lines()
        .find(|line| line.starts_with("form_1040_line_1z_wages|"))
        .unwrap()
        .split('|')
        .collect();
    assert_eq!(wages[1], "1");
    assert_eq!(wages[2], "w2.json: Box 1");
    assert_eq!(wages[3], "150000");
    // Second federal bracket at 20%, NY State 6% plus City 3.5% on
    // whole-dollar amounts.
    assert_eq!(parsed(wages[4]), dec!(0.2));
    assert_eq!(parsed(wages[5]), dec!(0.095));
    assert_eq!(parsed(wages[6]), dec!(0.295));

    // One row per tag, sorted by tag name, plus the header.
    assert_eq!(table.lines().count(), 8);
}

#[test]
fn test_marginal_by_input_rows() {
    let table = marginal_rate_table_by_input(&wage_facts(), &policy(), dec!(1000)).unwrap();
    let rows: Vec<Vec<&str>> = table
        .lines()
        .skip(1)
        .map(|line| line.split('|').collect())
        .collect();
    assert_eq!(rows.len(), 7);

    let wages = rows.iter().find(|row| row[1] == "Box 1").unwrap();
    assert_eq!(wages[0], "w2.json");
    assert_eq!(wages[2], "form_1040_line_1z_wages");
    assert_eq!(wages[3], "Wages, tips, other compensation");
    assert_eq!(wages[4], "150000");
    assert_eq!(parsed(wages[5]), dec!(0.2));
    assert_eq!(parsed(wages[6]), dec!(0.095));
    assert_eq!(parsed(wages[7]), dec!(0.295));

    // Medicare wages stay under the threshold either way, so that row
    // has a zero marginal everywhere.
    let medicare = rows.iter().find(|row| row[1] == "Box 5").unwrap();
    assert_eq!(parsed(medicare[5]), dec!(0));
    assert_eq!(parsed(medicare[7]), dec!(0));
}

#[test]
fn test_marginal_non_numeric_amounts_get_blank_cells() {
    let mut facts = wage_facts();
    // A fund outside the policy's percentage table is never totaled by
    // either pipeline, so a text amount is representable.
    facts.insert_source(
        "statements.json",
        vec![FactItem {
            amount: RawAmount::Text("see broker statement".to_string()),
            tags: vec![Tag::us_gov_bond_fund("fund_b")],
            path: "Note 1".to_string(),
            explanation: String::new(),
        }],
    );
    let policy = policy();

    let by_input = marginal_rate_table_by_input(&facts, &policy, dec!(1000)).unwrap();
    let row: Vec<&str> = by_input
        .lines()
        .find(|line| line.starts_with("statements.json|"))
        .unwrap()
        .split('|')
        .collect();
    assert_eq!(row[1], "Note 1");
    assert_eq!(row[4], "see broker statement");
    assert_eq!(&row[5..], ["", "", ""]);

    let by_tag = marginal_rate_table_by_tag(&facts, &policy, dec!(1000)).unwrap();
    let row: Vec<&str> = by_tag
        .lines()
        .find(|line| line.starts_with("ny_it_201_line_28_us_gov_bond_interest_items_fund_b|"))
        .unwrap()
        .split('|')
        .collect();
    assert_eq!(row[1], "1");
    assert_eq!(row[2], "statements.json: Note 1");
    assert_eq!(row[3], "0");
    assert_eq!(&row[4..], ["", "", ""]);
}

#[test]
fn test_marginal_rejects_non_positive_delta() {
    let facts = wage_facts();
    let policy = policy();
    for delta in [dec!(0), dec!(-1000)] {
        assert!(matches!(
            marginal_rate_table_by_input(&facts, &policy, delta),
            Err(EngineError::NonPositiveDelta)
        ));
        assert!(matches!(
            marginal_rate_table_by_tag(&facts, &policy, delta),
            Err(EngineError::NonPositiveDelta)
        ));
    }
}

#[test]
fn test_default_marginal_table_groups_by_tag() {
    let facts = wage_facts();
    let policy = policy();
    assert_eq!(
        marginal_rate_table(&facts, &policy, dec!(1000)).unwrap(),
        marginal_rate_table_by_tag(&facts, &policy, dec!(1000)).unwrap()
    );
}

// ---- graph discipline ----

#[test]
fn test_undeclared_read_fails_the_run() {
    let pipeline = Pipeline::new(vec![
        LineNode::checked("a", &[], |_| Ok(dec!(1))),
        LineNode::checked("b", &[], |ctx| Ok(ctx.dep("a")?)),
    ])
    .unwrap();
    let facts = wage_facts();
    let policy = policy();
    let index = facts.index();
    let err = pipeline.run(&index, &policy, None).unwrap_err();
    match err {
        EngineError::Graph(GraphError::UndeclaredDependency { node, dependency }) => {
            assert_eq!(node, "b");
            assert_eq!(dependency, "a");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_line_values_reject_unknown_keys() {
    let pipeline = Pipeline::new(vec![LineNode::checked("a", &[], |_| Ok(dec!(1)))]).unwrap();
    let facts = wage_facts();
    let policy = policy();
    let index = facts.index();
    let values = pipeline.run(&index, &policy, None).unwrap();
    assert_eq!(values.get("a").unwrap(), dec!(1));
    assert!(matches!(
        values.get("nope"),
        Err(GraphError::UnknownNode(key)) if key == "nope"
    ));
}
