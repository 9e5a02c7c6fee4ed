//! The predefined POP2 script-animation id -> label table, ported in full
//! from the original tool's id-to-name switch (including its several
//! duplicate labels at different ids, e.g. id 1 and id 200 both map to
//! `"StartRun"`, and the repeated `"Unknown"` placeholder entries). Ids with
//! no table entry fall back to the numeric-only `POP2_<id>` form.

/// `(id, label)` pairs, in id order as the original switch declared them.
pub const PREDEFINED_NAMES: &[(u16, &str)] = &[
    (1, "StartRun"),
    (2, "Stand"),
    (3, "StandingForwardJump"),
    (4, "RunningJump"),
    (5, "Turn"),
    (6, "RunningTurn"),
    (7, "StartFall1"),
    (8, "JumpUpToLedge_NoX"),
    (9, "Hang"),
    (10, "ClimbUp"),
    (11, "FallOntoTile"),
    (12, "Falling"),
    (13, "RunStop"),
    (14, "JumpUpAndHitCeiling"),
    (15, "GrabLedgeMidAir"),
    (16, "JumpUpToLedge_NoTileBehind"),
    (17, "LandingAfterShortFall"),
    (18, "Falling_AfterForwardJump"),
    (19, "StartFall0"),
    (20, "HardFall1"),
    (21, "FallAfterRunningJump"),
    (22, "DeadAfterFall"),
    (23, "ReleaseLedge"),
    (24, "JumpUpToLedge"),
    (25, "HangStraightAgainstWall"),
    (26, "CrouchSlide"),
    (27, "FallIntoQuicksand"),
    (28, "JumpUpIntoAir"),
    (29, "Step1"),
    (30, "Step2"),
    (31, "Step3"),
    (32, "Step4"),
    (33, "Step5"),
    (34, "Step6"),
    (35, "Step7"),
    (36, "Step8"),
    (37, "Step9"),
    (38, "Step10"),
    (39, "Step11"),
    (40, "Step12"),
    (41, "Step13"),
    (42, "FullStep"),
    (43, "StartRun0"),
    (44, "TestFoot"),
    (45, "FallBump"),
    (46, "JumpIntoWall"),
    (47, "Bump"),
    (48, "Unknown"),
    (49, "StandUpFromCrouch"),
    (50, "Crouch"),
    (51, "WallSpikeDeath_Left"),
    (52, "GetHitByFallingTile"),
    (53, "Unknown"),
    (54, "WallSpikeDeath_Right"),
    (55, "UnsheatheSword"),
    (56, "ForwardWithSword"),
    (57, "BackWithSword"),
    (58, "SwordStrike1"),
    (59, "ClimbUpIntoBoat"),
    (60, "Guard_Turn"),
    (61, "ParryAfterBeingParried"),
    (62, "Parry1"),
    (63, "LandEnGarde"),
    (64, "BumpEngarde_Forward"),
    (65, "BumpEngarde_Backward_MostLikely"),
    (66, "StrikeAfterParry"),
    (67, "Unknown"),
    (68, "ClimbDown"),
    (69, "BeingParried"),
    (70, "ExitLevel"),
    (71, "AligntoFloorAndDropDead"),
    (72, "Unknown"),
    (73, "ClimbUpFail"),
    (74, "GetHurtSwordFighting"),
    (75, "SwordStrike2"),
    (76, "Unknown"),
    (77, "GuardStanding"),
    (78, "DrinkPotion"),
    (79, "CrouchHop"),
    (80, "GuardIdleFlip"),
    (81, "FallBack"),
    (82, "Guard_Falling"),
    (83, "Guard_FallingDownToFollowPlayer"),
    (84, "Guard_StartRun"),
    (85, "Die1"),
    (86, "GuardAdvance"),
    (87, "ChasingSkeletonAttacksPlayer"),
    (88, "SkeletonRising"),
    (89, "Unknown"),
    (90, "GuardEnteringFightingStance"),
    (91, "PickupSword"),
    (92, "Sheathe"),
    (93, "FastSheathe"),
    (94, "GetHurtSwordFightingFromBehind"),
    (95, "FallAfterAdvancingWithSword"),
    (96, "SwordStrikeLow"),
    (97, "HitBySnake"),
    (98, "CrawlDie"),
    (99, "ReleaseLedgeTowardsTile"),
    (100, "Guard_RunningJump"),
    (101, "Guard_EndRun"),
    (102, "GuardSkeleton_StartRun"),
    (103, "Unknown"),
    (104, "FlameSword_Retreat"),
    (105, "FlameSword_LyingOnFloor"),
    (106, "FlameSword_WakeUp"),
    (107, "FlameSword_Die"),
    (108, "FlameSword_Advance"),
    (109, "FlameSword_Strike"),
    (110, "GuardBird_Worship"),
    (111, "ThrowingAwayBottle"),
    (112, "RattleSkeletonRemains"),
    (113, "Sliced"),
    (114, "RunningJumpFallCloseToEdge"),
    (115, "RunIntoLava"),
    (116, "FallIntoLava"),
    (117, "CrouchLoop"),
    (118, "CrushedByDoor"),
    (119, "Skeleton_LyingDead"),
    (120, "Skeleton_Collapsing"),
    (121, "CrawlIdle"),
    (122, "CrawlForward"),
    (123, "CrawlBackwards"),
    (124, "CrawlToStand"),
    (125, "StandToCrawl"),
    (126, "Skeleton_HitBySpikes"),
    (127, "TurnWhileFighting"),
    (128, "SitOnMagicCarpet"),
    (129, "SitOnMagicCarpet_DuringCutscene0"),
    (130, "Head_Spin1"),
    (131, "Head_Spin2"),
    (132, "Head_Spin3"),
    (133, "Head_Spin4"),
    (134, "Head_Spin5"),
    (135, "Head_Spin6"),
    (136, "Head_Spin7"),
    (137, "Head_Spin8"),
    (138, "Head_Spin9"),
    (139, "Head_AngryToIdle"),
    (140, "Head_ScreamWhenSeeingPlayer"),
    (141, "Head_AngryIdle"),
    (142, "Head_AngryStartMoveForward"),
    (143, "Head_AngryStartMoveUp"),
    (144, "Head_AngryStartMoveDown"),
    (145, "Head_CollideWithWall_Die"),
    (146, "Head_HitByFallingTile"),
    (147, "Head_BecomeAngry"),
    (150, "Head_Attack1"),
    (151, "Head_Attack2"),
    (152, "Head_Attack3"),
    (153, "Head_Hurt"),
    (154, "Head_Die"),
    (155, "Head_Idle"),
    (156, "Head_AngryFlip"),
    (157, "Head_CollideWithWall_Flip"),
    (158, "Head_FloatIntoWall"),
    (159, "Head_BecomeSad"),
    (160, "Head_SulkingStill0"),
    (161, "Head_SulkingStill1"),
    (162, "Head_SulkingToScream"),
    (163, "Head_SulkingToIdle"),
    (164, "Head_CollideWithWall_Die_Variant"),
    (165, "Head_AttackLoop_1"),
    (166, "Head_MaybeReturnToIdleAfterSeeingPlayer"),
    (168, "Snake_BumpIntoWall"),
    (169, "Snake_HitByFallingTile"),
    (170, "Snake_Advance"),
    (171, "Snake_EnterHoleInGround"),
    (172, "Snake_ExitHoleInGround"),
    (173, "Snake_Attack2"),
    (174, "Snake_Die"),
    (175, "Snake_Attack1"),
    (176, "Snake_RecoilBeforeAttacking"),
    (177, "Snake_AbandonAttack"),
    (180, "JinneeAppearing"),
    (184, "Unknown"),
    (185, "Guard_FallingToOffscreen"),
    (186, "Guard_FallingAfterRunningJump"),
    (187, "Guard_HittingGroundAfterRunningJumpFall"),
    (188, "Guard_WallSpikeDeath_Left"),
    (189, "Guard_WallSpikeDeath_Right"),
    (190, "Guard_GetSliced"),
    (191, "GuardBird_Dead1"),
    (192, "GuardBird_Dead2"),
    (193, "GuardBird_Dead3"),
    (194, "GuardBird_Dead4"),
    (195, "Guard_Dead"),
    (196, "FakePrinceDisappears"),
    (197, "FakePrinceLaughs"),
    (198, "FallTurnOnBridge"),
    (199, "SitOnMagicCarpet_DuringCutscene"),
    (200, "StartRun"),
    (201, "RunLoop1"),
    (202, "RunLoop2"),
    (203, "SwordStrike3"),
    (204, "SwordStrike4"),
    (205, "SwordStrike5"),
    (206, "Parry2"),
    (207, "Unknown"),
    (208, "Guard_Run"),
    (209, "Unknown"),
    (210, "Hang"),
    (211, "StepExtend"),
    (212, "HardFall2_Or_GuardGoingPoof"),
    (213, "Die2"),
    (214, "StartFall2"),
    (215, "EnterBoat"),
    (216, "GuardSkeleton_RunLoop"),
    (217, "Unknown"),
    (218, "Head_AngryMovingForward"),
    (219, "Head_AngryMovingUp"),
    (220, "Head_AngryMovingDown"),
    (221, "Head_AngryIdle"),
    (222, "Head_Sulking"),
    (223, "Snake_Idle"),
    (225, "Unknown"),
    (226, "Head_AttackLoop_2"),
    (227, "EnGarde"),
    (228, "StartSlowFall"),
    (229, "SlowFall_BumpIntoWall"),
    (230, "DieFromTouchingFlame"),
    (231, "RiseFromDeath"),
    (232, "Unknown"),
    (235, "FinishingClimbUp"),
    (236, "ClimbingUpAndLosingSword"),
    (237, "PickUpAndBeShocked"),
    (238, "GuardAppearingWithSmoke"),
    (239, "GuardGoingPoofWithSmoke"),
    (240, "RealFakePrinceDisappearing"),
    (241, "FailToUseSword"),
    (242, "UseSpell"),
    (243, "FakePrinceDying"),
    (244, "Unknown"),
];

/// Looks up the predefined label for a POP2 animation id, if any.
pub fn lookup(id: u16) -> Option<&'static str> {
    PREDEFINED_NAMES.iter().find(|(i, _)| *i == id).map(|(_, n)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_ids_map_to_same_label() {
        assert_eq!(lookup(1), Some("StartRun"));
        assert_eq!(lookup(200), Some("StartRun"));
    }

    #[test]
    fn unlisted_id_has_no_label() {
        assert_eq!(lookup(9999), None);
    }

    #[test]
    fn s2_scenario_id_resolves_to_hang() {
        assert_eq!(lookup(2), Some("Stand"));
        assert_eq!(lookup(9), Some("Hang"));
    }
}
