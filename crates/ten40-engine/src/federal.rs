//! The federal pipeline: Form 1040 and its supporting schedules wired
//! into one dependency graph.
//!
//! Node keys are the dotted form-and-line paths that expected-value
//! trees use, so a node's key is also its check path. The table is
//! declared in the order a preparer would fill the forms: Schedule SE
//! and its Schedule 1 adjustments, Form 8959, Schedules B and E, Form
//! 6781 feeding Schedule D, Form 8960, then Form 1040 itself down to
//! total tax.

use rust_decimal::Decimal;

use ten40_core::{round_to_dollars, Facts, Tag};
use ten40_federal::{
    form_1040, form_6781, form_8959, form_8960, schedule_1, schedule_2, schedule_b, schedule_d,
    schedule_e, schedule_se, worksheets, InvestmentIncome, OtherTaxes,
};
use ten40_policy::Policy;

use crate::error::{EngineError, GraphError};
use crate::graph::{LineNode, Pipeline};
use crate::verify::Verifier;

pub(crate) const SE_LINE_2: &str = "federal.schedule_se.line_2_schedule_c_and_k1_profit";
pub(crate) const SE_LINE_6: &str = "federal.schedule_se.line_6_total_se_earnings";
pub(crate) const SE_LINE_10: &str = "federal.schedule_se.line_10_social_security_portion";
pub(crate) const SE_LINE_11: &str = "federal.schedule_se.line_11_medicare_portion";
pub(crate) const SE_LINE_12: &str = "federal.schedule_se.line_12_self_employment_tax";
pub(crate) const SCH1_LINE_5: &str = "federal.schedule_1.line_5_rental_real_estate_income";
pub(crate) const SCH1_LINE_10: &str = "federal.schedule_1.line_10_additional_income";
pub(crate) const SCH1_LINE_15: &str = "federal.schedule_1.line_15_deductible_self_employment_tax";
pub(crate) const SCH1_LINE_16: &str =
    "federal.schedule_1.line_16_self_employed_retirement_contributions";
pub(crate) const SCH1_LINE_17: &str = "federal.schedule_1.line_17_self_employed_health_insurance";
pub(crate) const SCH1_LINE_26: &str = "federal.schedule_1.line_26_adjustments_to_income";
pub(crate) const F8959_LINE_18: &str = "federal.form_8959.line_18_additional_medicare_tax";
pub(crate) const SCHB_LINE_1: &str = "federal.schedule_b.line_1_taxable_interest";
pub(crate) const SCHB_LINE_6: &str = "federal.schedule_b.line_6_ordinary_dividends";
pub(crate) const SCHE_LINE_29A: &str = "federal.schedule_e.line_29a_total_nonpassive_income";
pub(crate) const SCHE_LINE_29B_LOSS: &str =
    "federal.schedule_e.line_29b_total_nonpassive_loss_allowed";
pub(crate) const SCHE_LINE_29B_179: &str =
    "federal.schedule_e.line_29b_total_section_179_deduction";
pub(crate) const SCHE_LINE_30: &str = "federal.schedule_e.line_30_total_income";
pub(crate) const SCHE_LINE_31: &str = "federal.schedule_e.line_31_total_losses";
pub(crate) const SCHE_LINE_32: &str = "federal.schedule_e.line_32_total_partnership_income";
pub(crate) const F6781_LINE_7: &str = "federal.form_6781.line_7_total_gain_loss_1256";
pub(crate) const F6781_LINE_8: &str = "federal.form_6781.line_8_short_term_portion";
pub(crate) const F6781_LINE_9: &str = "federal.form_6781.line_9_long_term_portion";
pub(crate) const SCHD_LINE_1A: &str = "federal.schedule_d.line_1a_short_term_gain";
pub(crate) const SCHD_LINE_3: &str =
    "federal.schedule_d.line_3_short_term_section_1061_adjustment";
pub(crate) const SCHD_LINE_4: &str = "federal.schedule_d.line_4_short_term_from_6781";
pub(crate) const SCHD_LINE_5: &str = "federal.schedule_d.line_5_short_term_k1_gain";
pub(crate) const SCHD_LINE_7: &str = "federal.schedule_d.line_7_net_short_term_gain";
pub(crate) const SCHD_LINE_10: &str =
    "federal.schedule_d.line_10_long_term_section_1061_adjustment";
pub(crate) const SCHD_LINE_11: &str = "federal.schedule_d.line_11_long_term_from_6781_and_4797";
pub(crate) const SCHD_LINE_12: &str = "federal.schedule_d.line_12_long_term_k1_gain";
pub(crate) const SCHD_LINE_15: &str = "federal.schedule_d.line_15_net_long_term_gain";
pub(crate) const SCHD_LINE_16: &str = "federal.schedule_d.line_16_net_capital_gain";
pub(crate) const F8960_LINE_1: &str = "federal.form_8960.line_1_taxable_interest";
pub(crate) const F8960_LINE_2: &str = "federal.form_8960.line_2_ordinary_dividends";
pub(crate) const F8960_LINE_4A: &str =
    "federal.form_8960.line_4a_rental_real_estate_royalties_partnerships";
pub(crate) const F8960_LINE_4B: &str = "federal.form_8960.line_4b_adjustment_nonsection_1411";
pub(crate) const F8960_LINE_4C: &str = "federal.form_8960.line_4c_net_income_from_rentals";
pub(crate) const F8960_LINE_5A: &str = "federal.form_8960.line_5a_net_gain_loss_disposition";
pub(crate) const F8960_LINE_5D: &str = "federal.form_8960.line_5d_net_gain_loss_disposition";
pub(crate) const F8960_LINE_8: &str = "federal.form_8960.line_8_total_investment_income";
pub(crate) const F8960_LINE_9A: &str = "federal.form_8960.line_9a_investment_interest_expense";
pub(crate) const F8960_LINE_9B: &str =
    "federal.form_8960.line_9b_state_local_foreign_income_tax";
pub(crate) const F8960_LINE_9C: &str = "federal.form_8960.line_9c_misc_investment_expenses";
pub(crate) const F8960_LINE_9D: &str = "federal.form_8960.line_9d_total_investment_expenses";
pub(crate) const F8960_LINE_11: &str =
    "federal.form_8960.line_11_total_deductions_and_modifications";
pub(crate) const F8960_LINE_12: &str = "federal.form_8960.line_12_net_investment_income";
pub(crate) const F8960_LINE_13: &str =
    "federal.form_8960.line_13_modified_adjusted_gross_income";
pub(crate) const F8960_LINE_15: &str = "federal.form_8960.line_15_modified_agi_over_threshold";
pub(crate) const F8960_LINE_16: &str = "federal.form_8960.line_16_smaller_of_line_12_or_15";
pub(crate) const F8960_LINE_17: &str = "federal.form_8960.line_17_net_investment_income_tax";
pub(crate) const F1040_LINE_1Z: &str = "federal.form_1040.line_1z_wages";
pub(crate) const F1040_LINE_3A: &str = "federal.form_1040.line_3a_qualified_dividends";
pub(crate) const F1040_LINE_5B: &str = "federal.form_1040.line_5b_pensions_annuities";
pub(crate) const F1040_LINE_9: &str = "federal.form_1040.line_9_total_income";
pub(crate) const F1040_LINE_10: &str = "federal.form_1040.line_10_adjustments_to_income";
pub(crate) const F1040_LINE_11: &str = "federal.form_1040.line_11_adjusted_gross_income";
pub(crate) const F1040_LINE_12: &str = "federal.form_1040.line_12_standard_deduction";
pub(crate) const F1040_LINE_13: &str = "federal.form_1040.line_13_qbi_deduction";
pub(crate) const F1040_LINE_14: &str = "federal.form_1040.line_14_total_deductions";
pub(crate) const F1040_LINE_15: &str = "federal.form_1040.line_15_taxable_income";
pub(crate) const SCH2_LINE_12: &str = "federal.schedule_2.line_12_net_investment_income_tax";
pub(crate) const SCH2_LINE_21: &str = "federal.schedule_2.line_21_other_taxes";
pub(crate) const F1040_LINE_23: &str = "federal.form_1040.line_23_other_taxes";
pub(crate) const QDCGT_LINE_25: &str =
    "federal.form_1040_qualified_dividends_capital_gain_worksheet.line_25_tax_on_all_income";
pub(crate) const F1040_LINE_16: &str = "federal.form_1040.line_16_tax";
pub(crate) const F1040_LINE_18: &str = "federal.form_1040.line_18_tax_and_amounts";
pub(crate) const F1040_LINE_21: &str = "federal.form_1040.line_21_total_credits";
pub(crate) const F1040_LINE_22: &str = "federal.form_1040.line_22_tax_after_credits";
pub(crate) const F1040_LINE_24: &str = "federal.form_1040.line_24_total_tax";
pub(crate) const FEDERAL_TOTAL: &str = "federal.compute_total_tax";

/// The full federal node table in declaration order.
pub(crate) fn nodes() -> Vec<LineNode> {
    vec![
        // Schedule SE and the Schedule 1 adjustments it drives.
        LineNode::checked(SE_LINE_2, &[], |ctx| {
            let k1_box_14a = ctx
                .index
                .required_total(&Tag::ScheduleSeK1Box14aSelfEmploymentEarnings)?;
            let k1_box_12 = ctx.index.required_total(&Tag::Section179Deduction)?;
            Ok(schedule_se::line_2_schedule_c_and_k1_profit(
                k1_box_14a, k1_box_12,
            ))
        }),
        LineNode::checked(SE_LINE_6, &[SE_LINE_2], |ctx| {
            Ok(schedule_se::line_6_total_se_earnings(
                ctx.dep(SE_LINE_2)?,
                &ctx.policy.self_employment_tax,
            ))
        }),
        LineNode::checked(SE_LINE_10, &[SE_LINE_6], |ctx| {
            Ok(schedule_se::line_10_social_security_tax(
                ctx.dep(SE_LINE_6)?,
                &ctx.policy.self_employment_tax,
            ))
        }),
        LineNode::checked(SE_LINE_11, &[SE_LINE_6], |ctx| {
            Ok(schedule_se::line_11_medicare_tax(
                ctx.dep(SE_LINE_6)?,
                &ctx.policy.self_employment_tax,
            ))
        }),
        LineNode::checked(SE_LINE_12, &[SE_LINE_10, SE_LINE_11], |ctx| {
            Ok(schedule_se::line_12_self_employment_tax(
                ctx.dep(SE_LINE_10)?,
                ctx.dep(SE_LINE_11)?,
            ))
        }),
        LineNode::checked(SCH1_LINE_15, &[SE_LINE_12], |ctx| {
            Ok(schedule_1::line_15_deductible_self_employment_tax(
                ctx.dep(SE_LINE_12)?,
            ))
        }),
        LineNode::checked(SCH1_LINE_16, &[], |ctx| {
            Ok(schedule_1::line_16_self_employed_retirement_contributions(
                ctx.index,
            )?)
        }),
        LineNode::checked(SCH1_LINE_17, &[], |ctx| {
            Ok(schedule_1::line_17_self_employed_health_insurance(
                ctx.index,
            )?)
        }),
        LineNode::checked(
            SCH1_LINE_26,
            &[SCH1_LINE_15, SCH1_LINE_16, SCH1_LINE_17],
            |ctx| {
                Ok(schedule_1::line_26_adjustments_to_income(
                    ctx.dep(SCH1_LINE_15)?,
                    ctx.dep(SCH1_LINE_16)?,
                    ctx.dep(SCH1_LINE_17)?,
                    Decimal::ZERO,
                ))
            },
        ),
        // Form 8959 additional Medicare tax.
        LineNode::checked(F8959_LINE_18, &[SE_LINE_6], |ctx| {
            let w2_medicare_wages = ctx.index.total(&Tag::W2Box5MedicareWages)?;
            Ok(form_8959::line_18_total_additional_medicare_tax(
                w2_medicare_wages,
                ctx.dep(SE_LINE_6)?,
                &ctx.policy.additional_medicare_tax,
            ))
        }),
        // Schedule B interest and dividends.
        LineNode::checked(SCHB_LINE_1, &[], |ctx| {
            Ok(schedule_b::line_1_taxable_interest(ctx.index)?)
        }),
        LineNode::checked(SCHB_LINE_6, &[], |ctx| {
            Ok(schedule_b::line_6_ordinary_dividends(ctx.index)?)
        }),
        LineNode::checked(F8960_LINE_1, &[SCHB_LINE_1], |ctx| {
            Ok(form_8960::line_1_taxable_interest(ctx.dep(SCHB_LINE_1)?))
        }),
        LineNode::checked(F8960_LINE_2, &[SCHB_LINE_6], |ctx| {
            Ok(form_8960::line_2_ordinary_dividends(ctx.dep(SCHB_LINE_6)?))
        }),
        // Schedule E part II partnership income.
        LineNode::checked(SCHE_LINE_29A, &[], |ctx| {
            Ok(schedule_e::line_29a_total_nonpassive_income(ctx.index)?)
        }),
        LineNode::checked(SCHE_LINE_29B_LOSS, &[], |ctx| {
            Ok(schedule_e::line_29b_total_nonpassive_loss_allowed(
                ctx.index,
            )?)
        }),
        LineNode::checked(SCHE_LINE_29B_179, &[], |ctx| {
            Ok(schedule_e::line_29b_total_section_179_deduction(ctx.index)?)
        }),
        LineNode::checked(SCHE_LINE_30, &[SCHE_LINE_29A], |ctx| {
            Ok(schedule_e::line_30_total_income(ctx.dep(SCHE_LINE_29A)?))
        }),
        LineNode::checked(
            SCHE_LINE_31,
            &[SCHE_LINE_29B_LOSS, SCHE_LINE_29B_179],
            |ctx| {
                Ok(schedule_e::line_31_total_losses(
                    ctx.dep(SCHE_LINE_29B_LOSS)?,
                    ctx.dep(SCHE_LINE_29B_179)?,
                ))
            },
        ),
        LineNode::checked(SCHE_LINE_32, &[SCHE_LINE_30, SCHE_LINE_31], |ctx| {
            Ok(schedule_e::line_32_total_partnership_income(
                ctx.dep(SCHE_LINE_30)?,
                ctx.dep(SCHE_LINE_31)?,
            ))
        }),
        LineNode::checked(SCH1_LINE_5, &[SCHE_LINE_32], |ctx| {
            Ok(schedule_1::line_5_rental_real_estate_income(
                ctx.dep(SCHE_LINE_32)?,
            ))
        }),
        LineNode::checked(SCH1_LINE_10, &[SCH1_LINE_5], |ctx| {
            Ok(schedule_1::line_10_additional_income(
                ctx.dep(SCH1_LINE_5)?,
                Decimal::ZERO,
            ))
        }),
        LineNode::checked(F8960_LINE_4A, &[SCHE_LINE_32], |ctx| {
            Ok(form_8960::line_4a_rental_real_estate_royalties_partnerships(
                ctx.dep(SCHE_LINE_32)?,
            ))
        }),
        // Line 4b backs the nonpassive trade-or-business income out of
        // investment income. Allowed losses already net to zero inside
        // line 29a's components, so only the 179 deduction and any
        // additional deductions adjust here.
        LineNode::checked(
            F8960_LINE_4B,
            &[SCHE_LINE_29A, SCHE_LINE_29B_179],
            |ctx| {
                let additional = ctx
                    .index
                    .total(&Tag::Form8960Line4bAdditionalNonpassiveDeductions)?;
                Ok(form_8960::line_4b_adjustment_nonsection_1411(
                    ctx.dep(SCHE_LINE_29A)?,
                    Decimal::ZERO,
                    ctx.dep(SCHE_LINE_29B_179)?,
                    additional,
                ))
            },
        ),
        LineNode::checked(F8960_LINE_4C, &[F8960_LINE_4A, F8960_LINE_4B], |ctx| {
            Ok(form_8960::line_4c_net_income_from_rentals(
                ctx.dep(F8960_LINE_4A)?,
                ctx.dep(F8960_LINE_4B)?,
            ))
        }),
        // Form 6781 section 1256 contracts, split 40/60 into Schedule D.
        LineNode::checked(F6781_LINE_7, &[], |ctx| {
            Ok(form_6781::line_7_total_gain_loss(ctx.index)?)
        }),
        LineNode::checked(F6781_LINE_8, &[F6781_LINE_7], |ctx| {
            Ok(form_6781::line_8_short_term_portion(
                ctx.dep(F6781_LINE_7)?,
                &ctx.policy.section_1256,
            ))
        }),
        LineNode::checked(F6781_LINE_9, &[F6781_LINE_7], |ctx| {
            Ok(form_6781::line_9_long_term_portion(
                ctx.dep(F6781_LINE_7)?,
                &ctx.policy.section_1256,
            ))
        }),
        // Schedule D capital gains.
        LineNode::checked(SCHD_LINE_1A, &[], |ctx| {
            Ok(schedule_d::line_1a_short_term_gain(ctx.index)?)
        }),
        LineNode::checked(SCHD_LINE_3, &[], |ctx| {
            Ok(schedule_d::line_3_short_term_section_1061_adjustment(
                ctx.index,
            )?)
        }),
        LineNode::checked(SCHD_LINE_4, &[F6781_LINE_8], |ctx| {
            Ok(schedule_d::line_4_short_term_from_6781(
                ctx.dep(F6781_LINE_8)?,
            ))
        }),
        LineNode::checked(SCHD_LINE_5, &[], |ctx| {
            Ok(schedule_d::line_5_short_term_k1_gain(ctx.index)?)
        }),
        LineNode::checked(
            SCHD_LINE_7,
            &[SCHD_LINE_1A, SCHD_LINE_3, SCHD_LINE_4, SCHD_LINE_5],
            |ctx| {
                Ok(schedule_d::line_7_net_short_term_gain(
                    ctx.dep(SCHD_LINE_1A)?,
                    ctx.dep(SCHD_LINE_3)?,
                    ctx.dep(SCHD_LINE_4)?,
                    ctx.dep(SCHD_LINE_5)?,
                    Decimal::ZERO,
                ))
            },
        ),
        LineNode::checked(SCHD_LINE_10, &[], |ctx| {
            Ok(schedule_d::line_10_long_term_section_1061_adjustment(
                ctx.index,
            )?)
        }),
        LineNode::checked(SCHD_LINE_11, &[F6781_LINE_9], |ctx| {
            Ok(schedule_d::line_11_long_term_from_6781_and_4797(
                ctx.dep(F6781_LINE_9)?,
                ctx.index,
            )?)
        }),
        LineNode::checked(SCHD_LINE_12, &[], |ctx| {
            Ok(schedule_d::line_12_long_term_k1_gain(ctx.index)?)
        }),
        LineNode::checked(
            SCHD_LINE_15,
            &[SCHD_LINE_10, SCHD_LINE_11, SCHD_LINE_12],
            |ctx| {
                Ok(schedule_d::line_15_net_long_term_gain(
                    ctx.dep(SCHD_LINE_10)?,
                    ctx.dep(SCHD_LINE_11)?,
                    ctx.dep(SCHD_LINE_12)?,
                ))
            },
        ),
        LineNode::checked(SCHD_LINE_16, &[SCHD_LINE_7, SCHD_LINE_15], |ctx| {
            Ok(schedule_d::line_16_net_capital_gain(
                ctx.dep(SCHD_LINE_7)?,
                ctx.dep(SCHD_LINE_15)?,
            ))
        }),
        // Form 8960 net investment income.
        LineNode::checked(F8960_LINE_5A, &[SCHD_LINE_16], |ctx| {
            Ok(form_8960::line_5a_net_gain_loss_disposition(
                ctx.dep(SCHD_LINE_16)?,
            ))
        }),
        LineNode::checked(F8960_LINE_5D, &[F8960_LINE_5A], |ctx| {
            Ok(form_8960::line_5d_net_gain_loss_disposition(
                ctx.dep(F8960_LINE_5A)?,
                Decimal::ZERO,
                Decimal::ZERO,
            ))
        }),
        LineNode::checked(
            F8960_LINE_8,
            &[F8960_LINE_1, F8960_LINE_2, F8960_LINE_4C, F8960_LINE_5D],
            |ctx| {
                let income = InvestmentIncome {
                    line_1_taxable_interest: ctx.dep(F8960_LINE_1)?,
                    line_2_ordinary_dividends: ctx.dep(F8960_LINE_2)?,
                    line_4c_net_income_from_rentals: ctx.dep(F8960_LINE_4C)?,
                    line_5d_net_gain_loss_disposition: ctx.dep(F8960_LINE_5D)?,
                    ..InvestmentIncome::default()
                };
                Ok(form_8960::line_8_total_investment_income(&income))
            },
        ),
        LineNode::checked(F8960_LINE_9A, &[], |ctx| {
            Ok(form_8960::line_9a_investment_interest_expense(ctx.index)?)
        }),
        LineNode::checked(F8960_LINE_9B, &[], |ctx| {
            Ok(form_8960::line_9b_state_local_foreign_income_tax(
                ctx.index,
                &ctx.policy.state_local_tax_deduction,
            )?)
        }),
        LineNode::checked(F8960_LINE_9C, &[], |ctx| {
            Ok(form_8960::line_9c_misc_investment_expenses(ctx.index)?)
        }),
        LineNode::unchecked(
            F8960_LINE_9D,
            &[F8960_LINE_9A, F8960_LINE_9B, F8960_LINE_9C],
            |ctx| {
                Ok(form_8960::line_9d_total_investment_expenses(
                    ctx.dep(F8960_LINE_9A)?,
                    ctx.dep(F8960_LINE_9B)?,
                    ctx.dep(F8960_LINE_9C)?,
                ))
            },
        ),
        LineNode::unchecked(F8960_LINE_11, &[F8960_LINE_9D], |ctx| {
            Ok(form_8960::line_11_total_deductions_and_modifications(
                ctx.dep(F8960_LINE_9D)?,
                Decimal::ZERO,
            ))
        }),
        LineNode::checked(F8960_LINE_12, &[F8960_LINE_8, F8960_LINE_11], |ctx| {
            Ok(form_8960::line_12_net_investment_income(
                ctx.dep(F8960_LINE_8)?,
                ctx.dep(F8960_LINE_11)?,
            ))
        }),
        // Form 1040 income.
        LineNode::checked(F1040_LINE_1Z, &[], |ctx| {
            Ok(form_1040::line_1z_wages(ctx.index)?)
        }),
        LineNode::checked(F1040_LINE_5B, &[], |ctx| {
            Ok(form_1040::line_5b_pensions_annuities(ctx.index)?)
        }),
        LineNode::checked(
            F1040_LINE_9,
            &[
                F1040_LINE_1Z,
                SCHB_LINE_1,
                SCHB_LINE_6,
                F1040_LINE_5B,
                SCHD_LINE_16,
                SCH1_LINE_10,
            ],
            |ctx| {
                Ok(form_1040::line_9_total_income(
                    ctx.dep(F1040_LINE_1Z)?,
                    ctx.dep(SCHB_LINE_1)?,
                    ctx.dep(SCHB_LINE_6)?,
                    ctx.dep(F1040_LINE_5B)?,
                    ctx.dep(SCHD_LINE_16)?,
                    ctx.dep(SCH1_LINE_10)?,
                ))
            },
        ),
        LineNode::checked(F1040_LINE_10, &[SCH1_LINE_26], |ctx| {
            Ok(ctx.dep(SCH1_LINE_26)?)
        }),
        LineNode::checked(F1040_LINE_11, &[F1040_LINE_9, F1040_LINE_10], |ctx| {
            // A nonzero tagged AGI overrides the computed chain, for
            // returns where only the back half is being recomputed.
            let agi_override = ctx.index.total(&Tag::Form1040Line11AdjustedGrossIncome)?;
            if agi_override != Decimal::ZERO {
                return Ok(round_to_dollars(agi_override));
            }
            Ok(form_1040::line_11_adjusted_gross_income(
                ctx.dep(F1040_LINE_9)?,
                ctx.dep(F1040_LINE_10)?,
            ))
        }),
        // Form 1040 deductions and taxable income.
        LineNode::checked(F1040_LINE_3A, &[], |ctx| {
            Ok(form_1040::line_3a_qualified_dividends(ctx.index)?)
        }),
        LineNode::checked(F1040_LINE_12, &[F8960_LINE_9B], |ctx| {
            // Itemized returns tag their Schedule A total minus SALT;
            // the capped SALT amount is shared with Form 8960 line 9b.
            let itemized = ctx.index.total(&Tag::Form1040Line12Deductions)?;
            let deduction_override = if itemized != Decimal::ZERO {
                Some(itemized + ctx.dep(F8960_LINE_9B)?)
            } else {
                None
            };
            Ok(form_1040::line_12_standard_deduction(
                ctx.policy.standard_deduction,
                deduction_override,
            ))
        }),
        LineNode::unchecked(F1040_LINE_13, &[], |ctx| {
            let qbi_direct = ctx.index.total(&Tag::Form1040Line13QbiDeduction)?;
            let section_199a_dividends = ctx
                .index
                .total(&Tag::Form1099DivBox5Section199aDividends)?;
            Ok(form_1040::line_13_qbi_deduction(
                qbi_direct,
                section_199a_dividends,
            ))
        }),
        LineNode::checked(F1040_LINE_14, &[F1040_LINE_12, F1040_LINE_13], |ctx| {
            Ok(form_1040::line_14_total_deductions(
                ctx.dep(F1040_LINE_12)?,
                ctx.dep(F1040_LINE_13)?,
            ))
        }),
        LineNode::checked(F1040_LINE_15, &[F1040_LINE_11, F1040_LINE_14], |ctx| {
            Ok(form_1040::line_15_taxable_income(
                ctx.dep(F1040_LINE_11)?,
                ctx.dep(F1040_LINE_14)?,
            ))
        }),
        // Form 8960 tax, which needs AGI.
        LineNode::checked(F8960_LINE_13, &[F1040_LINE_11], |ctx| {
            Ok(form_8960::line_13_modified_adjusted_gross_income(
                ctx.dep(F1040_LINE_11)?,
            ))
        }),
        LineNode::checked(F8960_LINE_15, &[F8960_LINE_13], |ctx| {
            Ok(form_8960::line_15_modified_agi_over_threshold(
                ctx.dep(F8960_LINE_13)?,
                &ctx.policy.net_investment_income_tax,
            ))
        }),
        LineNode::checked(F8960_LINE_16, &[F8960_LINE_12, F8960_LINE_15], |ctx| {
            Ok(form_8960::line_16_smaller_of_line_12_or_15(
                ctx.dep(F8960_LINE_12)?,
                ctx.dep(F8960_LINE_15)?,
            ))
        }),
        LineNode::checked(F8960_LINE_17, &[F8960_LINE_16], |ctx| {
            Ok(form_8960::line_17_net_investment_income_tax(
                ctx.dep(F8960_LINE_16)?,
                &ctx.policy.net_investment_income_tax,
            ))
        }),
        // Schedule 2 other taxes.
        LineNode::checked(SCH2_LINE_12, &[F8960_LINE_17], |ctx| {
            Ok(schedule_2::line_12_net_investment_income_tax(
                ctx.dep(F8960_LINE_17)?,
            ))
        }),
        LineNode::checked(
            SCH2_LINE_21,
            &[SE_LINE_12, F8959_LINE_18, SCH2_LINE_12],
            |ctx| {
                let taxes = OtherTaxes {
                    line_4_self_employment_tax: ctx.dep(SE_LINE_12)?,
                    line_11_additional_medicare_tax: ctx.dep(F8959_LINE_18)?,
                    line_12_net_investment_income_tax: ctx.dep(SCH2_LINE_12)?,
                    ..OtherTaxes::default()
                };
                Ok(schedule_2::line_21_other_taxes(&taxes))
            },
        ),
        LineNode::checked(F1040_LINE_23, &[SCH2_LINE_21], |ctx| {
            Ok(form_1040::line_23_other_taxes(ctx.dep(SCH2_LINE_21)?))
        }),
        // Tax on taxable income, preferential rates applied through the
        // qualified dividends and capital gain worksheet.
        LineNode::checked(
            QDCGT_LINE_25,
            &[F1040_LINE_15, F1040_LINE_3A, SCHD_LINE_15, SCHD_LINE_16],
            |ctx| {
                Ok(worksheets::line_25_tax_on_all_income(
                    ctx.dep(F1040_LINE_15)?,
                    ctx.dep(F1040_LINE_3A)?,
                    ctx.dep(SCHD_LINE_15)?,
                    ctx.dep(SCHD_LINE_16)?,
                    &ctx.policy.tax_computation_worksheet,
                    &ctx.policy.capital_gains,
                )?)
            },
        ),
        LineNode::checked(F1040_LINE_16, &[QDCGT_LINE_25], |ctx| {
            let tax_override = ctx.index.total(&Tag::Form1040Line16Tax)?;
            if tax_override != Decimal::ZERO {
                return Ok(form_1040::line_16_tax(tax_override));
            }
            Ok(form_1040::line_16_tax(ctx.dep(QDCGT_LINE_25)?))
        }),
        LineNode::checked(F1040_LINE_18, &[F1040_LINE_16], |ctx| {
            Ok(form_1040::line_18_tax_and_amounts(
                ctx.dep(F1040_LINE_16)?,
                Decimal::ZERO,
            ))
        }),
        LineNode::checked(F1040_LINE_21, &[], |ctx| {
            let child_tax_credit = ctx.index.total(&Tag::Form1040Line19ChildTaxCredit)?;
            let foreign_tax_credit = ctx.index.total(&Tag::Form1116ForeignTaxesPaid)?;
            Ok(form_1040::line_21_total_credits(
                child_tax_credit,
                foreign_tax_credit,
            ))
        }),
        LineNode::checked(F1040_LINE_22, &[F1040_LINE_18, F1040_LINE_21], |ctx| {
            Ok(form_1040::line_22_tax_after_credits(
                ctx.dep(F1040_LINE_18)?,
                ctx.dep(F1040_LINE_21)?,
            ))
        }),
        LineNode::checked(F1040_LINE_24, &[F1040_LINE_22, F1040_LINE_23], |ctx| {
            Ok(form_1040::line_24_total_tax(
                ctx.dep(F1040_LINE_22)?,
                ctx.dep(F1040_LINE_23)?,
            ))
        }),
        LineNode::checked(FEDERAL_TOTAL, &[F1040_LINE_24], |ctx| {
            Ok(ctx.dep(F1040_LINE_24)?)
        }),
    ]
}

/// The validated federal pipeline.
pub fn pipeline() -> Result<Pipeline, GraphError> {
    Pipeline::new(nodes())
}

/// Federal total tax for one return, Form 1040 line 24.
pub fn compute_federal_total_tax(
    facts: &Facts,
    policy: &Policy,
    verifier: Option<&Verifier>,
) -> Result<Decimal, EngineError> {
    tracing::debug!(facts = facts.len(), "running federal pipeline");
    let pipeline = pipeline()?;
    let index = facts.index();
    let values = pipeline.run(&index, policy, verifier)?;
    Ok(values.get(FEDERAL_TOTAL)?)
}
