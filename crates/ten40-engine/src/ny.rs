//! The New York pipeline: IT-201 and its companion forms.
//!
//! IT-201 starts from federal total income, so the table reuses the
//! federal income nodes verbatim, stripped of their check paths. Only
//! the federal pipeline owns those checks; here the same lines are
//! plain intermediates. The New York nodes then run the return proper:
//! IT-225 additions, the line 28 U.S. government bond subtraction,
//! State tax with the worksheet 4 recapture statement, the IT-112-R
//! resident credit, New York City tax with the IT-219 UBT credit
//! through IT-201-ATT, and the MCTMT from the IT-2105.9 worksheet.

use rust_decimal::Decimal;

use ten40_core::{Facts, Tag};
use ten40_ny::{
    it_112_r, it_201, it_201_att, it_2105_9, it_219, it_225, GovBondFundItem, MctmtEarningsItem,
};
use ten40_policy::Policy;

use crate::error::{EngineError, GraphError};
use crate::federal;
use crate::graph::{LineNode, Pipeline};
use crate::verify::Verifier;

const IT201_LINE_17: &str = "ny.it_201.line_17_total_federal_income";
const IT201_LINE_18: &str = "ny.it_201.line_18_federal_adjustments";
const IT201_LINE_19: &str = "ny.it_201.line_19_federal_agi";
const IT225_LINE_1A: &str = "ny.it_225.line_1a_additions";
const IT225_LINE_2: &str = "ny.it_225.line_2_total_part1_additions";
const IT225_LINE_4: &str = "ny.it_225.line_4_total_part1_additions";
const IT225_LINE_5A: &str = "ny.it_225.line_5a_additions";
const IT225_LINE_5B: &str = "ny.it_225.line_5b_additions";
const IT225_LINE_6: &str = "ny.it_225.line_6_total_part2_additions";
const IT225_LINE_8: &str = "ny.it_225.line_8_total_part2_additions";
const IT225_LINE_9: &str = "ny.it_225.line_9_total_additions";
const IT201_LINE_23: &str = "ny.it_201.line_23_other_additions";
const IT201_LINE_24: &str = "ny.it_201.line_24_ny_total_income";
const IT201_LINE_28: &str = "ny.it_201.line_28_us_gov_bond_interest";
const IT201_LINE_32: &str = "ny.it_201.line_32_ny_total_subtractions";
const IT201_LINE_33: &str = "ny.it_201.line_33_ny_adjusted_gross_income";
const IT201_LINE_34: &str = "ny.it_201.line_34_standard_deduction";
const IT201_LINE_35: &str = "ny.it_201.line_35_ny_taxable_income_before_exemptions";
const IT201_LINE_36: &str = "ny.it_201.line_36_dependent_exemptions";
const IT201_LINE_38: &str = "ny.it_201.line_38_ny_taxable_income";
const STMT2_LINE_3: &str =
    "ny.it_201.statement_2_tax_computation_worksheet_4.line_3_tax_from_rate_schedule";
const STMT2_LINE_4: &str =
    "ny.it_201.statement_2_tax_computation_worksheet_4.line_4_recapture_base_amount";
const STMT2_LINE_9: &str =
    "ny.it_201.statement_2_tax_computation_worksheet_4.line_9_incremental_benefit_addback";
const IT201_LINE_39: &str = "ny.it_201.line_39_nys_tax_on_line_38";
const IT112R_LINE_22_TOTAL: &str = "ny.it_112_r.line_22_total_income";
const IT112R_LINE_22_OTHER: &str = "ny.it_112_r.line_22_other_state_income";
const IT112R_LINE_24: &str = "ny.it_112_r.line_24_total_other_state_tax";
const IT112R_LINE_26: &str = "ny.it_112_r.line_26_ratio";
const IT112R_LINE_27: &str = "ny.it_112_r.line_27_ny_tax_times_ratio";
const IT112R_LINE_28: &str = "ny.it_112_r.line_28_smaller_of_line24_or_27";
const IT112R_LINE_30: &str = "ny.it_112_r.line_30_total_credit";
const IT112R_LINE_34: &str = "ny.it_112_r.line_34_resident_credit";
const IT201_LINE_41: &str = "ny.it_201.line_41_resident_credit";
const IT201_LINE_43: &str = "ny.it_201.line_43_nys_credits_total";
const IT201_LINE_44: &str = "ny.it_201.line_44_ny_state_tax_after_credits";
const IT201_LINE_46: &str = "ny.it_201.line_46_total_ny_state_taxes";
const IT201_LINE_47: &str = "ny.it_201.line_47_nyc_taxable_income";
const IT201_LINE_47A: &str = "ny.it_201.line_47a_nyc_resident_tax";
const IT201_LINE_49: &str = "ny.it_201.line_49_nyc_tax_after_household_credit";
const IT219_LINE_7: &str = "ny.it_219.line_7_beneficiary_ubt_credit";
const IT219_LINE_8: &str = "ny.it_219.line_8_total_ubt_credit";
const IT219_LINE_9: &str = "ny.it_219.line_9_taxable_income";
const IT219_LINE_10: &str = "ny.it_219.line_10_income_factor";
const IT219_LINE_11: &str = "ny.it_219.line_11_income_based_credit";
const IT219_LINE_15: &str = "ny.it_219.line_15_total_tax";
const IT219_LINE_16: &str = "ny.it_219.line_16_resident_ubt_credit";
const ATT_LINE_8: &str = "ny.it_201_att.line_8_nyc_resident_ubt_credit";
const ATT_LINE_10: &str = "ny.it_201_att.line_10_total_nyc_nonrefundable_credits";
const IT201_LINE_52: &str = "ny.it_201.line_52_nyc_tax_before_credits";
const IT201_LINE_53: &str = "ny.it_201.line_53_nyc_nonrefundable_credits";
const IT201_LINE_54: &str = "ny.it_201.line_54_nyc_tax_after_credits";
const WS4A_LINE_1: &str = "ny.it_2105_9.worksheet_4a_line_1_net_earnings_zone_1";
const IT201_LINE_54A: &str = "ny.it_201.line_54a_mctmt_net_earnings_zone_1";
const IT201_LINE_54C: &str = "ny.it_201.line_54c_mctmt_zone_1";
const IT201_LINE_54E: &str = "ny.it_201.line_54e_mctmt_total";
const IT201_LINE_58: &str = "ny.it_201.line_58_total_nyc_yonkers_mctmt";
const IT201_LINE_61: &str = "ny.it_201.line_61_total_taxes";
const IT201_LINE_62: &str = "ny.it_201.line_62_total_taxes";
const NY_TOTAL: &str = "ny.compute_total_tax";

/// Federal nodes the New York return reads, in federal declaration
/// order. Everything from the tax side of Form 1040 (deductions, tax,
/// credits, other taxes) stays out; IT-201 only needs the income
/// chain through Form 1040 line 9 and the Schedule 1 adjustments.
const FEDERAL_INCOME_KEYS: [&str; 35] = [
    federal::SE_LINE_2,
    federal::SE_LINE_6,
    federal::SE_LINE_10,
    federal::SE_LINE_11,
    federal::SE_LINE_12,
    federal::SCH1_LINE_15,
    federal::SCH1_LINE_16,
    federal::SCH1_LINE_17,
    federal::SCH1_LINE_26,
    federal::SCHB_LINE_1,
    federal::SCHB_LINE_6,
    federal::SCHE_LINE_29A,
    federal::SCHE_LINE_29B_LOSS,
    federal::SCHE_LINE_29B_179,
    federal::SCHE_LINE_30,
    federal::SCHE_LINE_31,
    federal::SCHE_LINE_32,
    federal::SCH1_LINE_5,
    federal::SCH1_LINE_10,
    federal::F6781_LINE_7,
    federal::F6781_LINE_8,
    federal::F6781_LINE_9,
    federal::SCHD_LINE_1A,
    federal::SCHD_LINE_3,
    federal::SCHD_LINE_4,
    federal::SCHD_LINE_5,
    federal::SCHD_LINE_7,
    federal::SCHD_LINE_10,
    federal::SCHD_LINE_11,
    federal::SCHD_LINE_12,
    federal::SCHD_LINE_15,
    federal::SCHD_LINE_16,
    federal::F1040_LINE_1Z,
    federal::F1040_LINE_5B,
    federal::F1040_LINE_9,
];

/// The full New York node table: recomputed federal income lines, then
/// the IT-201 chain in the order the forms are filled.
pub(crate) fn nodes() -> Vec<LineNode> {
    let mut nodes: Vec<LineNode> = federal::nodes()
        .into_iter()
        .filter(|node| FEDERAL_INCOME_KEYS.contains(&node.key()))
        .map(LineNode::without_check)
        .collect();
    nodes.extend([
        // IT-201 federal amounts.
        LineNode::checked(IT201_LINE_17, &[federal::F1040_LINE_9], |ctx| {
            Ok(it_201::line_17_total_federal_income(
                ctx.dep(federal::F1040_LINE_9)?,
            ))
        }),
        LineNode::checked(IT201_LINE_18, &[federal::SCH1_LINE_26], |ctx| {
            Ok(it_201::line_18_federal_adjustments(
                ctx.dep(federal::SCH1_LINE_26)?,
            ))
        }),
        LineNode::checked(IT201_LINE_19, &[IT201_LINE_17, IT201_LINE_18], |ctx| {
            Ok(it_201::line_19_federal_agi(
                ctx.dep(IT201_LINE_17)?,
                ctx.dep(IT201_LINE_18)?,
            ))
        }),
        // IT-225 New York additions.
        LineNode::checked(IT225_LINE_1A, &[], |ctx| {
            let items = [ctx.index.total(&Tag::NyIt201AttLine12Amount)?];
            Ok(it_225::line_1a_additions(&items))
        }),
        LineNode::checked(IT225_LINE_2, &[IT225_LINE_1A], |ctx| {
            Ok(it_225::line_2_total_part1_additions(
                ctx.dep(IT225_LINE_1A)?,
            ))
        }),
        LineNode::checked(IT225_LINE_4, &[IT225_LINE_2], |ctx| {
            Ok(it_225::line_4_total_part1_additions(ctx.dep(IT225_LINE_2)?))
        }),
        LineNode::checked(IT225_LINE_5A, &[], |ctx| {
            let items = [ctx.index.total(&Tag::NyIt225Line5aAddition)?];
            Ok(it_225::line_5a_additions(&items))
        }),
        LineNode::checked(IT225_LINE_5B, &[], |ctx| {
            let items = [ctx.index.total(&Tag::NyIt225Line5bAddition)?];
            Ok(it_225::line_5b_additions(&items))
        }),
        LineNode::checked(IT225_LINE_6, &[IT225_LINE_5A, IT225_LINE_5B], |ctx| {
            Ok(it_225::line_6_total_part2_additions(
                ctx.dep(IT225_LINE_5A)?,
                ctx.dep(IT225_LINE_5B)?,
            ))
        }),
        LineNode::checked(IT225_LINE_8, &[IT225_LINE_6], |ctx| {
            Ok(it_225::line_8_total_part2_additions(ctx.dep(IT225_LINE_6)?))
        }),
        LineNode::checked(IT225_LINE_9, &[IT225_LINE_4, IT225_LINE_8], |ctx| {
            Ok(it_225::line_9_total_additions(
                ctx.dep(IT225_LINE_4)?,
                ctx.dep(IT225_LINE_8)?,
            ))
        }),
        // IT-201 New York income.
        LineNode::checked(IT201_LINE_23, &[IT225_LINE_9], |ctx| {
            Ok(it_201::line_23_other_additions(ctx.dep(IT225_LINE_9)?))
        }),
        LineNode::checked(IT201_LINE_24, &[IT201_LINE_19, IT201_LINE_23], |ctx| {
            let line_21_414h = ctx.index.total(&Tag::NyIt201Line21PublicEmployee414h)?;
            let line_22_529 = ctx.index.total(&Tag::NyIt201Line22Ny529Distributions)?;
            Ok(it_201::line_24_ny_total_income(
                ctx.dep(IT201_LINE_19)?,
                line_21_414h,
                line_22_529,
                ctx.dep(IT201_LINE_23)?,
            ))
        }),
        LineNode::checked(IT201_LINE_28, &[], |ctx| {
            let percentages = &ctx.policy.ny_us_gov_bond_interest_percentages;
            let mut items = Vec::with_capacity(percentages.len());
            for fund in percentages.keys() {
                items.push(GovBondFundItem {
                    fund: fund.clone(),
                    amount: ctx.index.total(&Tag::us_gov_bond_fund(fund.clone()))?,
                });
            }
            Ok(it_201::line_28_us_gov_bond_interest(&items, percentages)?)
        }),
        LineNode::checked(IT201_LINE_32, &[IT201_LINE_28], |ctx| {
            Ok(it_201::line_32_ny_total_subtractions(
                ctx.dep(IT201_LINE_28)?,
            ))
        }),
        LineNode::checked(IT201_LINE_33, &[IT201_LINE_24, IT201_LINE_32], |ctx| {
            Ok(it_201::line_33_ny_adjusted_gross_income(
                ctx.dep(IT201_LINE_24)?,
                ctx.dep(IT201_LINE_32)?,
            ))
        }),
        LineNode::checked(IT201_LINE_34, &[], |ctx| Ok(ctx.policy.ny_standard_deduction)),
        LineNode::checked(IT201_LINE_35, &[IT201_LINE_33, IT201_LINE_34], |ctx| {
            Ok(it_201::line_35_ny_taxable_income_before_exemptions(
                ctx.dep(IT201_LINE_33)?,
                ctx.dep(IT201_LINE_34)?,
            ))
        }),
        LineNode::checked(IT201_LINE_36, &[], |ctx| {
            let dependents_count = ctx.index.required_total(&Tag::NyDependentsCount)?;
            Ok(it_201::line_36_dependent_exemptions(
                dependents_count,
                ctx.policy.ny_dependent_exemption_amount,
            ))
        }),
        LineNode::checked(IT201_LINE_38, &[IT201_LINE_35, IT201_LINE_36], |ctx| {
            Ok(it_201::line_38_ny_taxable_income(
                ctx.dep(IT201_LINE_35)?,
                ctx.dep(IT201_LINE_36)?,
            ))
        }),
        // Statement 2, tax computation worksheet 4: the recapture that
        // phases out the benefit of lower brackets at high income.
        LineNode::checked(STMT2_LINE_3, &[IT201_LINE_38], |ctx| {
            Ok(it_201::statement_2_line_3_tax_from_rate_schedule(
                ctx.dep(IT201_LINE_38)?,
                &ctx.policy.ny_nys_tax_rate_schedule,
            )?)
        }),
        LineNode::checked(STMT2_LINE_4, &[], |ctx| {
            Ok(ctx.policy.ny_tax_computation_worksheet_4.recapture_base_amount)
        }),
        LineNode::checked(STMT2_LINE_9, &[], |ctx| {
            Ok(ctx
                .policy
                .ny_tax_computation_worksheet_4
                .incremental_benefit_addback)
        }),
        LineNode::checked(
            IT201_LINE_39,
            &[STMT2_LINE_3, STMT2_LINE_4, STMT2_LINE_9],
            |ctx| {
                Ok(it_201::line_39_nys_tax_on_line_38(
                    ctx.dep(STMT2_LINE_3)?,
                    ctx.dep(STMT2_LINE_4)?,
                    ctx.dep(STMT2_LINE_9)?,
                ))
            },
        ),
        // IT-112-R resident credit for tax paid to another state.
        LineNode::checked(IT112R_LINE_22_TOTAL, &[IT201_LINE_33], |ctx| {
            Ok(it_112_r::line_22_total_income(ctx.dep(IT201_LINE_33)?))
        }),
        LineNode::checked(IT112R_LINE_22_OTHER, &[], |ctx| {
            let items = [ctx.index.total(&Tag::NyIt112RLine22OtherStateIncome)?];
            Ok(it_112_r::line_22_other_state_income(&items))
        }),
        LineNode::checked(IT112R_LINE_24, &[], |ctx| {
            let items = [ctx.index.total(&Tag::NyIt112RLine24OtherStateTax)?];
            Ok(it_112_r::line_24_total_other_state_tax(&items))
        }),
        LineNode::checked(
            IT112R_LINE_26,
            &[IT112R_LINE_22_TOTAL, IT112R_LINE_22_OTHER],
            |ctx| {
                Ok(it_112_r::line_26_ratio(
                    ctx.dep(IT112R_LINE_22_TOTAL)?,
                    ctx.dep(IT112R_LINE_22_OTHER)?,
                ))
            },
        ),
        LineNode::checked(IT112R_LINE_27, &[IT201_LINE_39, IT112R_LINE_26], |ctx| {
            Ok(it_112_r::line_27_ny_tax_times_ratio(
                ctx.dep(IT201_LINE_39)?,
                ctx.dep(IT112R_LINE_26)?,
            ))
        }),
        LineNode::checked(IT112R_LINE_28, &[IT112R_LINE_24, IT112R_LINE_27], |ctx| {
            Ok(it_112_r::line_28_smaller_of_line24_or_27(
                ctx.dep(IT112R_LINE_24)?,
                ctx.dep(IT112R_LINE_27)?,
            ))
        }),
        LineNode::checked(IT112R_LINE_30, &[IT112R_LINE_28], |ctx| {
            Ok(it_112_r::line_30_total_credit(ctx.dep(IT112R_LINE_28)?))
        }),
        LineNode::checked(IT112R_LINE_34, &[IT112R_LINE_30, IT201_LINE_39], |ctx| {
            Ok(it_112_r::line_34_resident_credit(
                ctx.dep(IT112R_LINE_30)?,
                ctx.dep(IT201_LINE_39)?,
            ))
        }),
        // IT-201 New York State tax after credits.
        LineNode::checked(IT201_LINE_41, &[IT112R_LINE_34], |ctx| {
            Ok(it_201::line_41_resident_credit(ctx.dep(IT112R_LINE_34)?))
        }),
        LineNode::checked(IT201_LINE_43, &[IT201_LINE_41], |ctx| {
            Ok(it_201::line_43_nys_credits_total(ctx.dep(IT201_LINE_41)?))
        }),
        LineNode::checked(IT201_LINE_44, &[IT201_LINE_39, IT201_LINE_43], |ctx| {
            Ok(it_201::line_44_ny_state_tax_after_credits(
                ctx.dep(IT201_LINE_39)?,
                ctx.dep(IT201_LINE_43)?,
            ))
        }),
        LineNode::checked(IT201_LINE_46, &[IT201_LINE_44], |ctx| {
            Ok(it_201::line_46_total_ny_state_taxes(
                ctx.dep(IT201_LINE_44)?,
            ))
        }),
        // New York City resident tax.
        LineNode::checked(IT201_LINE_47, &[IT201_LINE_38], |ctx| {
            Ok(it_201::line_47_nyc_taxable_income(ctx.dep(IT201_LINE_38)?))
        }),
        LineNode::checked(IT201_LINE_47A, &[IT201_LINE_47], |ctx| {
            Ok(it_201::line_47a_nyc_resident_tax(
                ctx.dep(IT201_LINE_47)?,
                &ctx.policy.nyc_resident_tax_rate_schedule,
            )?)
        }),
        LineNode::checked(IT201_LINE_49, &[IT201_LINE_47A], |ctx| {
            Ok(it_201::line_49_nyc_tax_after_household_credit(
                ctx.dep(IT201_LINE_47A)?,
            ))
        }),
        // IT-219 credit for the NYC unincorporated business tax.
        LineNode::checked(IT219_LINE_7, &[], |ctx| {
            let items = [ctx.index.total(&Tag::NyIt219Line7UbtCredit)?];
            Ok(it_219::line_7_beneficiary_ubt_credit(&items))
        }),
        LineNode::checked(IT219_LINE_8, &[IT219_LINE_7], |ctx| {
            Ok(it_219::line_8_total_ubt_credit(ctx.dep(IT219_LINE_7)?))
        }),
        LineNode::checked(IT219_LINE_9, &[IT201_LINE_47], |ctx| {
            Ok(it_219::line_9_taxable_income(ctx.dep(IT201_LINE_47)?))
        }),
        LineNode::checked(IT219_LINE_10, &[IT219_LINE_9], |ctx| {
            Ok(it_219::line_10_income_factor(
                ctx.dep(IT219_LINE_9)?,
                &ctx.policy.ny_it219_income_factor,
            ))
        }),
        LineNode::checked(IT219_LINE_11, &[IT219_LINE_8, IT219_LINE_10], |ctx| {
            Ok(it_219::line_11_income_based_credit(
                ctx.dep(IT219_LINE_8)?,
                ctx.dep(IT219_LINE_10)?,
            ))
        }),
        LineNode::checked(IT219_LINE_15, &[IT201_LINE_49], |ctx| {
            Ok(it_219::line_15_total_tax(ctx.dep(IT201_LINE_49)?))
        }),
        LineNode::checked(IT219_LINE_16, &[IT219_LINE_11, IT219_LINE_15], |ctx| {
            Ok(it_219::line_16_resident_ubt_credit(
                ctx.dep(IT219_LINE_11)?,
                ctx.dep(IT219_LINE_15)?,
            ))
        }),
        LineNode::checked(ATT_LINE_8, &[IT219_LINE_16], |ctx| {
            Ok(it_201_att::line_8_nyc_resident_ubt_credit(
                ctx.dep(IT219_LINE_16)?,
            ))
        }),
        LineNode::checked(ATT_LINE_10, &[ATT_LINE_8], |ctx| {
            Ok(it_201_att::line_10_total_nyc_nonrefundable_credits(
                ctx.dep(ATT_LINE_8)?,
            ))
        }),
        LineNode::checked(IT201_LINE_53, &[ATT_LINE_10], |ctx| {
            Ok(it_201::line_53_nyc_nonrefundable_credits(
                ctx.dep(ATT_LINE_10)?,
            ))
        }),
        LineNode::checked(IT201_LINE_52, &[IT201_LINE_49], |ctx| {
            Ok(it_201::line_52_nyc_tax_before_credits(
                ctx.dep(IT201_LINE_49)?,
            ))
        }),
        LineNode::checked(IT201_LINE_54, &[IT201_LINE_52, IT201_LINE_53], |ctx| {
            Ok(it_201::line_54_nyc_tax_after_credits(
                ctx.dep(IT201_LINE_52)?,
                ctx.dep(IT201_LINE_53)?,
            ))
        }),
        // MCTMT on net self-employment earnings in zone 1.
        LineNode::checked(WS4A_LINE_1, &[], |ctx| {
            let items = [MctmtEarningsItem {
                ordinary_business_income: ctx
                    .index
                    .required_total(&Tag::MctmtBaseOrdinaryIncome)?,
                guaranteed_payments_services: ctx
                    .index
                    .required_total(&Tag::MctmtBaseGuaranteedPayments)?,
            }];
            Ok(it_2105_9::worksheet_4a_line_1_net_earnings_zone_1(
                &items,
                &ctx.policy.ny_mctmt,
            ))
        }),
        LineNode::checked(IT201_LINE_54A, &[WS4A_LINE_1], |ctx| {
            Ok(it_201::line_54a_mctmt_net_earnings_zone_1(
                ctx.dep(WS4A_LINE_1)?,
            ))
        }),
        LineNode::checked(IT201_LINE_54C, &[IT201_LINE_54A], |ctx| {
            Ok(it_201::line_54c_mctmt_zone_1(
                ctx.dep(IT201_LINE_54A)?,
                &ctx.policy.ny_mctmt_rates,
            ))
        }),
        LineNode::checked(IT201_LINE_54E, &[IT201_LINE_54C], |ctx| {
            Ok(it_201::line_54e_mctmt_total(ctx.dep(IT201_LINE_54C)?))
        }),
        // IT-201 totals.
        LineNode::checked(IT201_LINE_58, &[IT201_LINE_54, IT201_LINE_54E], |ctx| {
            Ok(it_201::line_58_total_nyc_yonkers_mctmt(
                ctx.dep(IT201_LINE_54)?,
                ctx.dep(IT201_LINE_54E)?,
            ))
        }),
        LineNode::checked(IT201_LINE_61, &[IT201_LINE_46, IT201_LINE_58], |ctx| {
            Ok(it_201::line_61_total_taxes(
                ctx.dep(IT201_LINE_46)?,
                ctx.dep(IT201_LINE_58)?,
            ))
        }),
        LineNode::checked(IT201_LINE_62, &[IT201_LINE_61], |ctx| {
            Ok(it_201::line_62_total_taxes(ctx.dep(IT201_LINE_61)?))
        }),
        LineNode::checked(NY_TOTAL, &[IT201_LINE_62], |ctx| {
            Ok(ctx.dep(IT201_LINE_62)?)
        }),
    ]);
    nodes
}

/// The validated New York pipeline.
pub fn pipeline() -> Result<Pipeline, GraphError> {
    Pipeline::new(nodes())
}

/// New York total tax for one return, IT-201 line 62.
pub fn compute_ny_total_tax(
    facts: &Facts,
    policy: &Policy,
    verifier: Option<&Verifier>,
) -> Result<Decimal, EngineError> {
    tracing::debug!(facts = facts.len(), "running New York pipeline");
    let pipeline = pipeline()?;
    let index = facts.index();
    let values = pipeline.run(&index, policy, verifier)?;
    Ok(values.get(NY_TOTAL)?)
}
