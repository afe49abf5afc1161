// Built-in landscape model: model-space units, y grows downward.
pub const DEFAULT_LANDSCAPE: &[(f32, f32)] = &[
    (-463., 866.),
    (-449., 866.),
    (-445., 879.),
    (-433., 880.),
    (-431., 893.),
    (-423., 894.),
    (-422., 927.),
    (-408., 958.),
    (-409., 975.),
    (-402., 996.),
    (-384., 1010.),
    (-380., 1030.),
    (-364., 1050.),
    (-347., 1060.),
    (-336., 1040.),
    (-321., 1020.),
    (-312., 1010.),
    (-302., 998.),
    (-296., 987.),
    (-281., 976.),
    (-277., 965.),
    (-263., 958.),
    (-251., 942.),
    (-238., 941.),
    (-226., 932.),
    (-213., 932.),
    (-197., 934.),
    (-187., 945.),
    (-185., 956.),
    (-172., 968.),
    (-172., 980.),
    (-160., 992.),
    (-160., 998.),
    (-147., 1010.),
    (-135., 1010.),
    (-125., 990.),
    (-114., 985.),
    (-103., 992.),
    (-93., 1010.),
    (-87.3, 1030.),
    (-64.6, 1040.),
    (-62.3, 1080.),
    (-52.1, 1110.),
    (-55.5, 1120.),
    (-38.5, 1130.),
    (-11.3, 1130.),
    (15.9, 1110.),
    (21.5, 1100.),
    (35.1, 1090.),
    (43.1, 1080.),
    (57.8, 1070.),
    (63.5, 1040.),
    (72.5, 1020.),
    (82.8, 1010.),
    (99.8, 999.),
    (111., 983.),
    (122., 963.),
    (130., 934.),
    (141., 929.),
    (148., 916.),
    (152., 903.),
    (162., 890.),
    (178., 891.),
    (190., 881.),
    (203., 855.),
    (214., 846.),
    (220., 820.),
    (227., 784.),
    (224., 760.),
    (229., 733.),
    (239., 703.),
    (254., 700.),
    (258., 687.),
    (266., 675.),
    (280., 675.),
    (282., 686.),
    (294., 685.),
    (299., 699.),
    (306., 699.),
    (317., 705.),
    (328., 717.),
    (331., 743.),
    (354., 754.),
    (354., 768.),
    (366., 793.),
    (374., 809.),
    (388., 811.),
    (399., 823.),
    (400., 831.),
    (411., 845.),
    (414., 856.),
    (427., 869.),
    (440., 869.),
    (442., 906.),
    (452., 939.),
    (453., 950.),
    (464., 950.),
    (467., 963.),
    (478., 976.),
    (485., 995.),
    (495., 1010.),
    (506., 1020.),
    (508., 1050.),
    (521., 1090.),
    (520., 1100.),
    (525., 1110.),
    (535., 1120.),
    (546., 1120.),
    (554., 1150.),
    (561., 1160.),
    (575., 1170.),
    (589., 1180.),
    (696., 1180.),
    (702., 1140.),
    (713., 1120.),
    (720., 1100.),
    (728., 1100.),
    (736., 1070.),
    (747., 1070.),
    (759., 1050.),
    (774., 1050.),
    (784., 1040.),
    (804., 1040.),
    (805., 1050.),
    (829., 1090.),
    (829., 1100.),
    (845., 1110.),
    (855., 1120.),
    (864., 1130.),
    (871., 1150.),
    (894., 1170.),
    (951., 1170.),
    (977., 1180.),
    (1030., 1180.),
    (1040., 1150.),
    (1040., 1110.),
    (1040., 1090.),
    (1060., 1090.),
    (1060., 1070.),
    (1070., 1060.),
    (1080., 1050.),
    (1080., 1030.),
    (1090., 1020.),
    (1110., 1020.),
    (1110., 992.),
    (1120., 966.),
    (1130., 962.),
    (1140., 974.),
    (1170., 974.),
    (1180., 963.),
    (1180., 937.),
    (1190., 906.),
    (1210., 902.),
    (1210., 888.),
    (1220., 877.),
    (1230., 865.),
    (1250., 864.),
    (1250., 879.),
    (1270., 878.),
    (1270., 889.),
    (1280., 889.),
    (1280., 927.),
    (1290., 959.),
    (1290., 970.),
    (1300., 991.),
    (1320., 1000.),
    (1320., 1030.),
    (1330., 1040.),
];
